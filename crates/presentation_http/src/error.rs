//! API error handling
//!
//! Two outcomes exist on the wire: a validation failure (400) or an
//! unavailable/failed calculation (503). The response body is always
//! `{"error": <code>, "message": <text>}`.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub error: String,
    /// Human-readable description
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::InvalidParameters(msg) => (StatusCode::BAD_REQUEST, "InvalidParameters", msg),
            Self::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "ServiceUnavailable", msg)
            },
        };

        let body = ErrorResponse {
            error: code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            // Input rejected before any calculation started
            ApplicationError::InvalidInput(msg) => Self::InvalidParameters(msg),
            // Everything surfacing from the calculation or the holiday
            // feed makes the service unable to answer
            ApplicationError::Domain(e) => Self::ServiceUnavailable(e.to_string()),
            ApplicationError::HolidaySourceUnavailable(msg)
            | ApplicationError::Configuration(msg)
            | ApplicationError::Internal(msg) => Self::ServiceUnavailable(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::DomainError;

    #[test]
    fn invalid_parameters_message() {
        let err = ApiError::InvalidParameters("'days' must be a positive integer".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid parameters: 'days' must be a positive integer"
        );
    }

    #[test]
    fn service_unavailable_message() {
        let err = ApiError::ServiceUnavailable("holiday feed offline".to_string());
        assert_eq!(err.to_string(), "Service unavailable: holiday feed offline");
    }

    #[test]
    fn error_response_serialization() {
        let resp = ErrorResponse {
            error: "InvalidParameters".to_string(),
            message: "'hours' must be a positive integer".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"error\":\"InvalidParameters\""));
        assert!(json.contains("\"message\""));
    }

    #[test]
    fn error_response_shape_has_exactly_two_fields() {
        let resp = ErrorResponse {
            error: "ServiceUnavailable".to_string(),
            message: "feed offline".to_string(),
        };
        let value: serde_json::Value = serde_json::to_value(&resp).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("error"));
        assert!(object.contains_key("message"));
    }

    #[test]
    fn into_response_invalid_parameters() {
        let err = ApiError::InvalidParameters("bad".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn into_response_service_unavailable() {
        let err = ApiError::ServiceUnavailable("down".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn application_invalid_input_converts_to_invalid_parameters() {
        let source = ApplicationError::InvalidInput("'days' rejected".to_string());
        let result: ApiError = source.into();
        assert!(matches!(result, ApiError::InvalidParameters(_)));
    }

    #[test]
    fn application_holiday_source_converts_to_service_unavailable() {
        let source = ApplicationError::HolidaySourceUnavailable("HTTP 502".to_string());
        let result: ApiError = source.into();
        let ApiError::ServiceUnavailable(msg) = result else {
            unreachable!("Expected ServiceUnavailable");
        };
        assert!(msg.contains("HTTP 502"));
    }

    #[test]
    fn application_domain_error_converts_to_service_unavailable() {
        let source = ApplicationError::Domain(DomainError::CalendarWalkExceeded { scanned: 60 });
        let result: ApiError = source.into();
        assert!(matches!(result, ApiError::ServiceUnavailable(_)));
    }

    #[test]
    fn application_internal_converts_to_service_unavailable() {
        let source = ApplicationError::Internal("unexpected".to_string());
        let result: ApiError = source.into();
        assert!(matches!(result, ApiError::ServiceUnavailable(_)));
    }

    #[test]
    fn api_error_has_debug() {
        let err = ApiError::InvalidParameters("x".to_string());
        let debug = format!("{err:?}");
        assert!(debug.contains("InvalidParameters"));
    }
}
