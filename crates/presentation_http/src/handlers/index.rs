//! Service index handler

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Service index response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IndexResponse {
    /// Service description
    pub message: String,
    /// Available endpoints
    pub endpoints: EndpointMap,
}

/// Map of the endpoints this service exposes
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EndpointMap {
    pub health: String,
    pub ready: String,
    pub working_days: String,
    pub openapi: String,
}

/// Describe the service and its endpoints
#[utoipa::path(
    get,
    path = "/",
    tag = "index",
    responses(
        (status = 200, description = "Service index", body = IndexResponse)
    )
)]
pub async fn service_index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Fechas Habiles API - Colombia".to_string(),
        endpoints: EndpointMap {
            health: "/health".to_string(),
            ready: "/ready".to_string(),
            working_days: "/working-days?days=<number>&hours=<number>&date=<ISO8601>".to_string(),
            openapi: "/api-docs/openapi.json".to_string(),
        },
    })
}
