//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Date/time could not be interpreted or represented
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    /// Holiday entry does not parse as a calendar date
    #[error("Invalid holiday date: {0}")]
    InvalidHolidayDate(String),

    /// Hour count is negative, non-finite, or out of range
    #[error("Invalid hour count: {0}")]
    InvalidHourCount(String),

    /// Day count is out of range
    #[error("Invalid day count: {0}")]
    InvalidDayCount(u32),

    /// Calendar scan advanced too far without finding a working day
    #[error("No working day found within {scanned} calendar days")]
    CalendarWalkExceeded { scanned: u32 },
}

impl DomainError {
    /// Create an invalid date/time error
    pub fn invalid_datetime(detail: impl Into<String>) -> Self {
        Self::InvalidDateTime(detail.into())
    }

    /// Create an invalid holiday date error
    pub fn invalid_holiday(raw: impl Into<String>) -> Self {
        Self::InvalidHolidayDate(raw.into())
    }
}
