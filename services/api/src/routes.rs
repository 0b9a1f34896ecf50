use crate::infra::{AppState, ScoringState};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use ethical_score::error::AppError;
use ethical_score::scoring::{EthicalScore, ProductEthicalData, UserLocation};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) product: ProductEthicalData,
    #[serde(default)]
    pub(crate) user_location: Option<UserLocation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchScoreRequest {
    pub(crate) products: Vec<ProductEthicalData>,
    #[serde(default)]
    pub(crate) user_location: Option<UserLocation>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    #[serde(flatten)]
    pub(crate) score: EthicalScore,
    pub(crate) grade_label: &'static str,
    pub(crate) badge_color: &'static str,
}

impl From<EthicalScore> for ScoreResponse {
    fn from(score: EthicalScore) -> Self {
        Self {
            grade_label: score.grade.label(),
            badge_color: score.grade.badge_color(),
            score,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchScoreResponse {
    pub(crate) scores: Vec<ScoreResponse>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BoycottResponse {
    pub(crate) brand_name: String,
    pub(crate) on_boycott_list: bool,
}

pub(crate) fn scoring_router(state: ScoringState) -> Router {
    Router::new()
        .route("/api/v1/ethical-score", post(score_endpoint))
        .route("/api/v1/ethical-score/batch", post(batch_score_endpoint))
        .route("/api/v1/brands/:brand_name/boycott", get(boycott_endpoint))
        .with_state(state)
}

pub(crate) fn with_service_routes(state: ScoringState) -> Router {
    scoring_router(state)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn score_endpoint(
    State(state): State<ScoringState>,
    Json(payload): Json<ScoreRequest>,
) -> Json<ScoreResponse> {
    let score = state
        .engine
        .score(&payload.product, payload.user_location.as_ref());
    Json(score.into())
}

pub(crate) async fn batch_score_endpoint(
    State(state): State<ScoringState>,
    Json(payload): Json<BatchScoreRequest>,
) -> Result<Json<BatchScoreResponse>, AppError> {
    let limit = state.limits.max_batch_size;
    if payload.products.len() > limit {
        return Err(AppError::BatchTooLarge {
            limit,
            received: payload.products.len(),
        });
    }

    let scores = state
        .engine
        .score_batch(&payload.products, payload.user_location.as_ref());
    info!(products = scores.len(), "scored product batch");

    Ok(Json(BatchScoreResponse {
        scores: scores.into_iter().map(ScoreResponse::from).collect(),
    }))
}

pub(crate) async fn boycott_endpoint(
    State(state): State<ScoringState>,
    Path(brand_name): Path<String>,
) -> Json<BoycottResponse> {
    let on_boycott_list = state.engine.is_boycotted(&brand_name);
    Json(BoycottResponse {
        brand_name,
        on_boycott_list,
    })
}
