//! OpenAPI documentation module
//!
//! Serves the OpenAPI 3.1 document as plain JSON. No bundled UI; point
//! any Swagger/ReDoc viewer at `/api-docs/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use crate::{error, handlers};

/// OpenAPI documentation for the Fechas Habiles API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fechas Habiles API",
        version = "0.3.1",
        description = "Adds working days and hours to a date under Colombian business rules",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "index", description = "Service index"),
        (name = "health", description = "Health check and readiness endpoints"),
        (name = "working-days", description = "Working-days date arithmetic")
    ),
    paths(
        handlers::index::service_index,
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::working_days::add_working_time,
    ),
    components(
        schemas(
            handlers::index::IndexResponse,
            handlers::index::EndpointMap,
            handlers::health::HealthResponse,
            handlers::health::ReadinessResponse,
            handlers::health::SourceStatus,
            handlers::working_days::WorkingDaysResponse,
            error::ErrorResponse,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Serve the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
