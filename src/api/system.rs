//! Liveness and readiness endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

use super::{ApiResponse, AppState, HealthResponse};

#[derive(Debug, Serialize)]
pub struct HealthReadinessChecks {
    pub database: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthReadyResponse {
    pub ready: bool,
    pub uptime_seconds: u64,
    pub checks: HealthReadinessChecks,
}

/// `GET /health`
///
/// Constant body; never touches the datastore.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// `GET /health/ready`
///
/// Readiness probe that checks database connectivity.
pub async fn health_ready(State(state): State<Arc<AppState>>) -> Response {
    let db_ready = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed: database unreachable");
            false
        }
    };

    let status = if db_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ApiResponse::success(HealthReadyResponse {
            ready: db_ready,
            uptime_seconds: state.start_time.elapsed().as_secs(),
            checks: HealthReadinessChecks { database: db_ready },
        })),
    )
        .into_response()
}
