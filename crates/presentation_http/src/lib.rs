//! Fechas Habiles HTTP presentation layer
//!
//! This crate provides the HTTP API for the Colombian working-days
//! calculator: the `/working-days` query endpoint plus health, index
//! and OpenAPI routes.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod validation;

pub use error::{ApiError, ErrorResponse};
pub use middleware::{REQUEST_ID_HEADER, RequestId, RequestIdLayer};
pub use routes::create_router;
pub use state::AppState;
