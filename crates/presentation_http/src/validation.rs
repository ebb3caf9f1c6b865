//! Query parameter validation
//!
//! The query contract is deliberately strict: numeric parameters must be
//! positive integers in canonical form (no sign, no leading zeros, no
//! fraction, no surrounding whitespace), and `date` must be Z-suffixed
//! ISO 8601 with either no fractional seconds or exactly three digits.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::error::ApiError;

/// Parse a strictly positive integer in canonical form.
///
/// The value must round-trip through integer formatting, which rejects
/// `+5`, `007`, `4.0`, ` 4` and similar near-misses.
pub fn parse_positive_int(name: &str, value: &str) -> Result<u32, ApiError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0 && n.to_string() == value)
        .ok_or_else(|| {
            ApiError::InvalidParameters(format!("'{name}' must be a positive integer"))
        })
}

/// Parse a strict Z-suffixed ISO 8601 UTC timestamp.
///
/// Accepted shapes are `YYYY-MM-DDTHH:MM:SSZ` and
/// `YYYY-MM-DDTHH:MM:SS.mmmZ` (exactly three fractional digits). Like the
/// integers, the value must round-trip through formatting, which rejects
/// signed years, whitespace padding and short fields that chrono's numeric
/// parser would otherwise tolerate.
pub fn parse_utc_instant(value: &str) -> Result<DateTime<Utc>, ApiError> {
    let format = match value.len() {
        20 => "%Y-%m-%dT%H:%M:%SZ",
        24 => "%Y-%m-%dT%H:%M:%S%.3fZ",
        _ => {
            return Err(invalid_date());
        },
    };

    NaiveDateTime::parse_from_str(value, format)
        .ok()
        .filter(|naive| naive.format(format).to_string() == value)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(invalid_date)
}

fn invalid_date() -> ApiError {
    ApiError::InvalidParameters(
        "'date' must be a valid ISO 8601 date with Z suffix (UTC)".to_string(),
    )
}
