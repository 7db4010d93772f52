// GyaanSetu - Gujarati AI tutoring gateway
// Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gyaansetu::config::load_config;
use gyaansetu::server::{build_health_report, GyaanServer};

#[derive(Debug, Parser)]
#[command(name = "gyaansetu", version, about = "Gujarati AI tutoring gateway")]
struct Cli {
    /// Configuration file (defaults to ~/.gyaansetu/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging for the gateway
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP gateway (default)
    Serve {
        /// Bind address, e.g. 0.0.0.0:3000
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print the credential and project readiness report as JSON
    Check,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "gyaansetu=debug,tower_http=debug"
    } else {
        "gyaansetu=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind_address = bind;
            }
            GyaanServer::new(config)?.serve().await
        }
        Command::Check => {
            let report = build_health_report(&config.credentials, true, false);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}
