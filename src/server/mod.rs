// GyaanSetu HTTP gateway
//
// JSON endpoints for tutoring chat, project catalog browsing, retrieval,
// speech and vision. Every handler reads the shared `AppState`; nothing is
// mutated after startup.

mod chat;
mod dashboard;
mod error;
mod form;
pub mod health;
mod lenient;
mod llm;
mod projects;
mod rag;
mod rag_projects;
mod speech;
mod vision;

pub use error::ApiError;
pub use health::{build_health_report, HealthReport};

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use chrono::{SecondsFormat, Utc};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::providers::ProviderPool;

/// Read-only state shared by every handler.
pub struct AppState {
    pub config: AppConfig,
    pub pool: ProviderPool,
}

impl AppState {
    /// Build provider clients for every configured credential.
    pub fn new(config: AppConfig) -> Result<Self> {
        let pool = ProviderPool::from_config(&config).context("Failed to build provider clients")?;
        Ok(Self { config, pool })
    }
}

/// Main gateway server
pub struct GyaanServer {
    state: Arc<AppState>,
}

impl GyaanServer {
    pub fn new(config: AppConfig) -> Result<Self> {
        Ok(Self {
            state: Arc::new(AppState::new(config)?),
        })
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Start the HTTP server
    pub async fn serve(self) -> Result<()> {
        let settings = &self.state.config.server;
        let addr: SocketAddr = settings
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", settings.bind_address))?;

        let mut app = create_router(Arc::clone(&self.state))
            .layer(axum::extract::DefaultBodyLimit::max(settings.body_limit_bytes))
            .layer(TraceLayer::new_for_http());
        if settings.cors_enabled {
            app = app.layer(CorsLayer::permissive());
        }

        tracing::info!("Starting GyaanSetu gateway on {}", addr);
        tracing::info!("Providers available: {:?}", self.state.pool.configured());

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Route table. Layers (body limit, tracing, CORS) are added by `serve`.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/chat", post(chat::handle_chat))
        .route("/api/projects", get(projects::list_projects).post(projects::project_action))
        .route("/api/llm", get(llm::list_llm).post(llm::llm_action))
        .route(
            "/api/rag-projects",
            get(rag_projects::list_rag_projects).post(rag_projects::rag_project_action),
        )
        .route("/api/rag", post(rag::handle_rag))
        .route(
            "/api/dashboard-data",
            get(dashboard::dashboard_data).post(dashboard::dashboard_action),
        )
        .route("/api/health", get(health::health).post(health::health_action))
        .route("/api/stt", post(speech::speech_to_text))
        .route("/api/tts", post(speech::text_to_speech))
        .route("/api/vision", post(vision::analyze_image))
        .with_state(state)
}

/// RFC 3339 UTC timestamp with millisecond precision.
pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
