use axum::{
    extract::{Extension, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use fundamentals_provider::load_fundamentals;
use lynch_scoring::ranker::top_n;
use lynch_scoring::{RiskProfile, Screener, ScoringConfig};
use screener_core::{FundamentalsProvider, ProviderError, ScreenResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::request_id::RequestId;
use crate::{ApiResponse, AppError, AppState};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ScreenRequest {
    /// Empty means the whole universe
    #[serde(default)]
    pub tickers: Vec<String>,
    #[serde(default = "default_risk_tolerance")]
    pub risk_tolerance: String,
    #[serde(default = "default_universe")]
    pub universe: String,
    /// Partial rubric; unspecified fields keep their defaults
    #[serde(default)]
    pub scoring_config: Option<ScoringConfig>,
    #[serde(default)]
    pub limit: Option<usize>,
}

fn default_risk_tolerance() -> String {
    "balanced".into()
}
fn default_universe() -> String {
    "stub".into()
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreenResponse {
    pub results: Vec<ScreenResult>,
    pub total_screened: usize,
    pub risk_profile: String,
    pub generated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn resolve_universe(state: &AppState, name: &str) -> Result<Arc<dyn FundamentalsProvider>, AppError> {
    match name {
        "stub" => Ok(Arc::clone(&state.provider)),
        other => Err(AppError::bad_request(anyhow::anyhow!(
            "Unknown universe: {}",
            other
        ))),
    }
}

/// Map ProviderError to AppError with appropriate status codes.
fn provider_err(e: ProviderError) -> AppError {
    let status = match e {
        ProviderError::NotFound(_) => StatusCode::NOT_FOUND,
        ProviderError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    AppError::with_status(status, anyhow::anyhow!("{}", e))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn hello() -> Json<Value> {
    Json(json!({ "message": "hello screener" }))
}

async fn get_profiles() -> Json<ApiResponse<Vec<RiskProfile>>> {
    Json(ApiResponse::success(RiskProfile::all().to_vec()))
}

async fn screen(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(req): Json<ScreenRequest>,
) -> Result<Json<ApiResponse<ScreenResponse>>, AppError> {
    let provider = resolve_universe(&state, &req.universe)?;

    let profile = RiskProfile::resolve(&req.risk_tolerance);
    let scoring_config = req
        .scoring_config
        .unwrap_or_else(|| state.scoring_config.as_ref().clone());
    let screener = Screener::new(profile, scoring_config)
        .map_err(|e| AppError::bad_request(anyhow::anyhow!("Invalid scoring_config: {}", e)))?;

    let batch = load_fundamentals(provider.as_ref(), &req.tickers)
        .await
        .map_err(provider_err)?;

    tracing::info!(
        request_id = %request_id.0,
        "Screen request: {} companies, {} profile",
        batch.len(),
        profile.name
    );
    let total_screened = batch.len();
    let mut results = screener.screen_concurrent(batch).await?;
    if let Some(limit) = req.limit {
        results = top_n(&results, limit);
    }

    Ok(Json(ApiResponse::success(ScreenResponse {
        results,
        total_screened,
        risk_profile: profile.name.to_string(),
        generated_at: Utc::now(),
    })))
}

pub fn screener_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/hello", get(hello))
        .route("/api/profiles", get(get_profiles))
        .route("/api/screen", post(screen))
}
