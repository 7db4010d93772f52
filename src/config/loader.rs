// Configuration loader
// Layers defaults, ~/.gyaansetu/config.toml and GYAANSETU_* environment variables

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::constants::OLLAMA_BASE_URL;
use super::credentials::Credentials;
use super::settings::{AppConfig, ProviderSettings, ServerSettings};

/// Shape of the optional TOML file and of `GYAANSETU_*` overrides.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    server: ServerSettings,
    providers: ProviderSettings,
}

/// Default location of the config file (`~/.gyaansetu/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".gyaansetu").join("config.toml"))
}

/// Load configuration from the process environment.
///
/// `explicit_path` must exist when given; the default path is optional.
pub fn load_config(explicit_path: Option<&Path>) -> Result<AppConfig> {
    let mut config = load_from_sources(
        explicit_path,
        default_config_path().as_deref(),
        Credentials::from_env(),
    )?;

    if let Ok(url) = std::env::var(OLLAMA_BASE_URL) {
        if !url.trim().is_empty() {
            config.providers.ollama_base_url = url;
        }
    }

    tracing::debug!(
        "Loaded configuration: bind={}, credentials={:?}",
        config.server.bind_address,
        config.credentials
    );

    Ok(config)
}

fn load_from_sources(
    explicit_path: Option<&Path>,
    default_path: Option<&Path>,
    credentials: Credentials,
) -> Result<AppConfig> {
    let mut builder = config::Config::builder();

    if let Some(path) = explicit_path {
        if !path.exists() {
            anyhow::bail!("Configuration file not found: {}", path.display());
        }
        builder = builder.add_source(config::File::from(path).required(true));
    } else if let Some(path) = default_path {
        builder = builder.add_source(config::File::from(path).required(false));
    }

    let layered = builder
        .add_source(
            config::Environment::with_prefix("GYAANSETU")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("Failed to assemble configuration sources")?;

    let file: FileConfig = layered
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(AppConfig {
        server: file.server,
        providers: file.providers,
        credentials,
    })
}
