//! HTTP boundary for the screener.
//!
//! Thin axum layer over `lynch-scoring`: handlers load fundamentals from the
//! configured provider, run the screener and wrap the output in [`ApiResponse`].

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    Json, Router,
};
use fundamentals_provider::StubProvider;
use lynch_scoring::ScoringConfig;
use screener_core::FundamentalsProvider;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod request_id;
pub mod screener_routes;
pub mod security_headers;


use request_id::request_id_middleware;
use security_headers::security_headers_middleware;

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn FundamentalsProvider>,
    /// Rubric used when a request does not bring its own
    pub scoring_config: Arc<ScoringConfig>,
}

impl AppState {
    pub fn new(provider: Arc<dyn FundamentalsProvider>, scoring_config: ScoringConfig) -> Self {
        Self {
            provider,
            scoring_config: Arc::new(scoring_config),
        }
    }
}

// ---------------------------------------------------------------------------
// Response envelope and errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Handler error carrying the status to answer with.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: anyhow::Error,
}

impl AppError {
    pub fn with_status(status: StatusCode, error: anyhow::Error) -> Self {
        Self { status, error }
    }

    pub fn bad_request(error: anyhow::Error) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, error)
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR, err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = format!("{:#}", self.error);
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, "Request failed: {}", message);
        } else {
            tracing::warn!(status = %self.status, "Request rejected: {}", message);
        }
        (self.status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Fixture for the stub universe; the bundled one when unset
    pub stub_data_path: Option<PathBuf>,
    /// Default rubric override
    pub scoring_config_path: Option<PathBuf>,
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            stub_data_path: None,
            scoring_config_path: None,
            log_json: false,
        }
    }
}

impl ServerConfig {
    /// Read `SCREENER_HOST`, `SCREENER_PORT`, `STUB_DATA_PATH`,
    /// `SCORING_CONFIG_PATH` and `LOG_FORMAT` from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("SCREENER_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid SCREENER_PORT {:?}: {}", raw, e))?,
            None => defaults.port,
        };

        Ok(Self {
            host: non_empty("SCREENER_HOST").unwrap_or(defaults.host),
            port,
            stub_data_path: non_empty("STUB_DATA_PATH").map(PathBuf::from),
            scoring_config_path: non_empty("SCORING_CONFIG_PATH").map(PathBuf::from),
            log_json: non_empty("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json")),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "api_server=info,lynch_scoring=info,fundamentals_provider=info,tower_http=info".into()
    });

    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

// ---------------------------------------------------------------------------
// Router and server
// ---------------------------------------------------------------------------

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(screener_routes::screener_routes())
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Load configuration, build state and serve until Ctrl-C.
pub async fn run_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()?;
    init_tracing(config.log_json);

    let provider = StubProvider::open(config.stub_data_path.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load stub fundamentals: {}", e))?;
    tracing::info!("Stub universe holds {} companies", provider.len());

    let scoring_config = match &config.scoring_config_path {
        Some(path) => {
            let loaded = ScoringConfig::from_path(path)?;
            tracing::info!("Using scoring config from {}", path.display());
            loaded
        }
        None => ScoringConfig::default(),
    };

    let app = build_router(AppState::new(Arc::new(provider), scoring_config));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Screener API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
