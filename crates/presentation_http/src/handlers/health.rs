//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is alive", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub holiday_source: SourceStatus,
}

/// Status of the holiday source
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SourceStatus {
    pub healthy: bool,
    /// Number of holidays currently known, when loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_count: Option<usize>,
}

/// Readiness check - can the service answer calculations?
///
/// Loads the holiday catalog on first call; a failing feed makes the
/// service not ready.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Holiday catalog is available", body = ReadinessResponse),
        (status = 503, description = "Holiday source cannot be loaded", body = ReadinessResponse)
    )
)]
#[instrument(skip(state))]
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let probe = state.working_days.probe_holiday_source().await;

    let (ready, holiday_count) = match probe {
        Ok(count) => (true, Some(count)),
        Err(_) => (false, None),
    };

    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            holiday_source: SourceStatus {
                healthy: ready,
                holiday_count,
            },
        }),
    )
}
