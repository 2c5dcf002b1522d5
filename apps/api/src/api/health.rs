//! Health check endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    mongodb: bool,
    response_time_ms: u64,
}

/// Create a health check router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(liveness_check))
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Liveness check - the process is up
async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Readiness check - verifies MongoDB connection
async fn readiness_check(State(state): State<AppState>) -> Json<ReadyResponse> {
    let status = database::mongodb::check_health_detailed(&state.mongo_client).await;

    Json(ReadyResponse {
        status: if status.healthy { "ready" } else { "unhealthy" }.to_string(),
        mongodb: status.healthy,
        response_time_ms: status.response_time_ms,
    })
}
