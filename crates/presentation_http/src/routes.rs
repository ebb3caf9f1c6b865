//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, openapi, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service index
        .route("/", get(handlers::index::service_index))
        // Health and readiness
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Working-days calculation
        .route(
            "/working-days",
            get(handlers::working_days::add_working_time),
        )
        // OpenAPI document
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        // Attach state
        .with_state(state)
}
