//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Caller-supplied input was rejected before any computation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The external holiday source could not be reached or understood
    #[error("Holiday source unavailable: {0}")]
    HolidaySourceUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::HolidaySourceUnavailable(_))
    }
}
