//! Working-days calculation handler
//!
//! Query parameters arrive as raw strings so validation stays entirely
//! under this crate's control; an empty string counts as an absent
//! parameter, matching pre-parsed form handling in common gateways.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{DateTime, Utc};
use domain::CalculationRequest;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::ApiError,
    state::AppState,
    validation::{parse_positive_int, parse_utc_instant},
};

/// Query parameters for the working-days calculation
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WorkingDaysQuery {
    /// Number of working days to add (positive integer)
    #[serde(default)]
    pub days: Option<String>,
    /// Number of working hours to add (positive integer)
    #[serde(default)]
    pub hours: Option<String>,
    /// UTC start instant, ISO 8601 with Z suffix; defaults to now
    #[serde(default)]
    pub date: Option<String>,
}

/// Calculation result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkingDaysResponse {
    /// Resulting UTC instant, `YYYY-MM-DDTHH:MM:SSZ`
    pub date: String,
}

fn present(param: Option<&str>) -> Option<&str> {
    param.filter(|value| !value.is_empty())
}

/// Add working days and hours to a start instant
///
/// Applies Colombian business rules: Monday to Friday, 08:00-17:00 with
/// a 12:00-13:00 lunch break, national holidays excluded, all in the
/// America/Bogota time zone.
#[utoipa::path(
    get,
    path = "/working-days",
    tag = "working-days",
    params(WorkingDaysQuery),
    responses(
        (status = 200, description = "Resulting UTC instant", body = WorkingDaysResponse),
        (status = 400, description = "Invalid query parameters", body = crate::error::ErrorResponse),
        (status = 503, description = "Holiday source unavailable", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, query), fields(days = ?query.days, hours = ?query.hours))]
pub async fn add_working_time(
    State(state): State<AppState>,
    Query(query): Query<WorkingDaysQuery>,
) -> Result<Json<WorkingDaysResponse>, ApiError> {
    let days_param = present(query.days.as_deref());
    let hours_param = present(query.hours.as_deref());

    if days_param.is_none() && hours_param.is_none() {
        return Err(ApiError::InvalidParameters(
            "At least one of 'days' or 'hours' must be provided".to_string(),
        ));
    }

    let days = days_param
        .map(|raw| parse_positive_int("days", raw))
        .transpose()?
        .unwrap_or(0);
    let hours = hours_param
        .map(|raw| parse_positive_int("hours", raw))
        .transpose()?
        .unwrap_or(0);

    let start: DateTime<Utc> = match present(query.date.as_deref()) {
        Some(raw) => parse_utc_instant(raw)?,
        None => Utc::now(),
    };

    let request = CalculationRequest::new(start, days, f64::from(hours))
        .map_err(|e| ApiError::InvalidParameters(e.to_string()))?;

    let result = state.working_days.add_working_time(&request).await?;

    Ok(Json(WorkingDaysResponse {
        date: result.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_count_as_absent() {
        assert!(present(Some("")).is_none());
        assert!(present(None).is_none());
        assert_eq!(present(Some("4")), Some("4"));
    }

    #[test]
    fn query_deserializes_missing_fields_to_none() {
        let query: WorkingDaysQuery = serde_json::from_str("{}").unwrap();
        assert!(query.days.is_none());
        assert!(query.hours.is_none());
        assert!(query.date.is_none());
    }

    #[test]
    fn response_serializes_date_field() {
        let resp = WorkingDaysResponse {
            date: "2025-08-01T14:00:00Z".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"date":"2025-08-01T14:00:00Z"}"#);
    }

    #[test]
    fn response_format_has_no_fractional_seconds() {
        let instant: DateTime<Utc> = "2025-04-10T20:00:00.123Z".parse().unwrap();
        let formatted = instant.format("%Y-%m-%dT%H:%M:%SZ").to_string();
        assert_eq!(formatted, "2025-04-10T20:00:00Z");
    }
}
