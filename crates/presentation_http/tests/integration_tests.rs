//! Integration tests for HTTP handlers
//!
//! All scenarios use the fixed UTC-5 offset of America/Bogota: 08:00
//! local is 13:00Z, 17:00 local is 22:00Z.
#![allow(clippy::expect_used)]

use std::sync::Arc;

use application::{HolidayCatalog, WorkingDaysService, error::ApplicationError, ports::HolidaySourcePort};
use async_trait::async_trait;
use axum_test::TestServer;
use presentation_http::{RequestIdLayer, routes::create_router, state::AppState};

/// Holiday source with a fixed list
struct FixedHolidaySource {
    dates: Vec<String>,
}

#[async_trait]
impl HolidaySourcePort for FixedHolidaySource {
    async fn fetch_holidays(&self) -> Result<Vec<String>, ApplicationError> {
        Ok(self.dates.clone())
    }
}

/// Holiday source that always fails
struct FailingHolidaySource;

#[async_trait]
impl HolidaySourcePort for FailingHolidaySource {
    async fn fetch_holidays(&self) -> Result<Vec<String>, ApplicationError> {
        Err(ApplicationError::HolidaySourceUnavailable(
            "connection refused".to_string(),
        ))
    }
}

fn state_with_source(source: Arc<dyn HolidaySourcePort>) -> AppState {
    let catalog = Arc::new(HolidayCatalog::new(source));
    AppState::new(Arc::new(WorkingDaysService::new(catalog)))
}

fn create_test_server_with_holidays(dates: &[&str]) -> TestServer {
    let source = Arc::new(FixedHolidaySource {
        dates: dates.iter().map(ToString::to_string).collect(),
    });
    let router = create_router(state_with_source(source));
    TestServer::new(router).expect("Failed to create test server")
}

fn create_test_server() -> TestServer {
    create_test_server_with_holidays(&[])
}

fn create_failing_test_server() -> TestServer {
    let router = create_router(state_with_source(Arc::new(FailingHolidaySource)));
    TestServer::new(router).expect("Failed to create test server")
}

// ============ Index Endpoint Tests ============

#[tokio::test]
async fn index_lists_endpoints() {
    let server = create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("Fechas Habiles"));
    assert_eq!(body["endpoints"]["health"], "/health");
    assert!(
        body["endpoints"]["working_days"]
            .as_str()
            .unwrap()
            .starts_with("/working-days")
    );
}

// ============ Health Endpoint Tests ============

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn readiness_endpoint_reports_holiday_count() {
    let server = create_test_server_with_holidays(&["2025-01-01", "2025-01-06"]);

    let response = server.get("/ready").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["holiday_source"]["healthy"], true);
    assert_eq!(body["holiday_source"]["holiday_count"], 2);
}

#[tokio::test]
async fn readiness_endpoint_unavailable_when_source_fails() {
    let server = create_failing_test_server();

    let response = server.get("/ready").await;

    response.assert_status_service_unavailable();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], false);
    assert_eq!(body["holiday_source"]["healthy"], false);
}

// ============ OpenAPI Endpoint Tests ============

#[tokio::test]
async fn openapi_document_is_served() {
    let server = create_test_server();

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["info"]["title"], "Fechas Habiles API");
    assert!(body["paths"]["/working-days"].is_object());
}

// ============ Working Days Validation Tests ============

#[tokio::test]
async fn rejects_request_with_no_parameters() {
    let server = create_test_server();

    let response = server.get("/working-days").await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "InvalidParameters");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn empty_string_parameters_count_as_absent() {
    let server = create_test_server();

    let response = server.get("/working-days?days=&hours=").await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "InvalidParameters");
}

#[tokio::test]
async fn rejects_zero_days() {
    let server = create_test_server();

    let response = server.get("/working-days?days=0").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn rejects_plus_signed_days() {
    let server = create_test_server();

    let response = server.get("/working-days?days=%2B5").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn rejects_leading_zero_days() {
    let server = create_test_server();

    let response = server.get("/working-days?days=007").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn rejects_absurd_day_counts() {
    let server = create_test_server();

    let response = server.get("/working-days?days=4294967295").await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "InvalidParameters");
}

#[tokio::test]
async fn rejects_fractional_hours() {
    let server = create_test_server();

    let response = server.get("/working-days?hours=4.0").await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("'hours'"));
}

#[tokio::test]
async fn rejects_non_numeric_days() {
    let server = create_test_server();

    let response = server.get("/working-days?days=abc").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn rejects_date_without_z_suffix() {
    let server = create_test_server();

    let response = server
        .get("/working-days?days=1&date=2025-01-13T13:00:00")
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("ISO 8601"));
}

#[tokio::test]
async fn rejects_date_only_value() {
    let server = create_test_server();

    let response = server.get("/working-days?days=1&date=2025-01-13").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn rejects_impossible_date() {
    let server = create_test_server();

    let response = server
        .get("/working-days?days=1&date=2025-02-30T10:00:00Z")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn rejects_non_canonical_date_shapes() {
    let server = create_test_server();

    let padded = server
        .get("/working-days?days=1&date=%20025-08-01T14:30:00Z")
        .await;
    padded.assert_status_bad_request();

    let signed = server
        .get("/working-days?days=1&date=%2B2025-08-01T14:30:0Z")
        .await;
    signed.assert_status_bad_request();
}

// ============ Working Days Calculation Tests ============

#[tokio::test]
async fn adds_one_working_day() {
    let server = create_test_server();

    // Monday 2025-01-13 08:00 local
    let response = server
        .get("/working-days?days=1&date=2025-01-13T13:00:00Z")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["date"], "2025-01-14T13:00:00Z");
}

#[tokio::test]
async fn friday_plus_one_day_lands_on_monday() {
    let server = create_test_server();

    // Friday 2025-01-17 08:00 local
    let response = server
        .get("/working-days?days=1&date=2025-01-17T13:00:00Z")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["date"], "2025-01-20T13:00:00Z");
}

#[tokio::test]
async fn adds_hours_across_lunch() {
    let server = create_test_server();

    // Monday 2025-01-13 11:30 local + 2h = 14:30 local
    let response = server
        .get("/working-days?hours=2&date=2025-01-13T16:30:00Z")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["date"], "2025-01-13T19:30:00Z");
}

#[tokio::test]
async fn adds_days_then_hours() {
    let server = create_test_server();

    // Monday 2025-01-13 08:00 local + 2 days + 8 hours = Wednesday 17:00 local
    let response = server
        .get("/working-days?days=2&hours=8&date=2025-01-13T13:00:00Z")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["date"], "2025-01-15T22:00:00Z");
}

#[tokio::test]
async fn saturday_start_normalizes_backward() {
    let server = create_test_server();

    // Saturday 2025-01-11 14:00 local + 1h: normalize to Friday 17:00,
    // then one hour lands on Monday 09:00 local
    let response = server
        .get("/working-days?hours=1&date=2025-01-11T19:00:00Z")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["date"], "2025-01-13T14:00:00Z");
}

#[tokio::test]
async fn skips_holidays_when_stepping_days() {
    let server = create_test_server_with_holidays(&["2025-01-06"]);

    // Friday 2025-01-03 08:00 local + 1 day skips the Epiphany Monday
    let response = server
        .get("/working-days?days=1&date=2025-01-03T13:00:00Z")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["date"], "2025-01-07T13:00:00Z");
}

#[tokio::test]
async fn accepts_dates_with_milliseconds() {
    let server = create_test_server();

    let response = server
        .get("/working-days?days=1&date=2025-01-13T13:00:00.000Z")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["date"], "2025-01-14T13:00:00Z");
}

#[tokio::test]
async fn defaults_to_current_instant_when_date_absent() {
    let server = create_test_server();

    let response = server.get("/working-days?days=1").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    // Exact value depends on the wall clock; the shape must still hold
    let date = body["date"].as_str().unwrap();
    assert_eq!(date.len(), 20);
    assert!(date.ends_with('Z'));
}

#[tokio::test]
async fn returns_unavailable_when_holiday_source_fails() {
    let server = create_failing_test_server();

    let response = server
        .get("/working-days?days=1&date=2025-01-13T13:00:00Z")
        .await;

    response.assert_status_service_unavailable();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "ServiceUnavailable");
    assert!(body["message"].is_string());
}

// ============ Middleware Tests ============

#[tokio::test]
async fn responses_carry_a_request_id() {
    let source: Arc<dyn HolidaySourcePort> = Arc::new(FixedHolidaySource { dates: vec![] });
    let router = create_router(state_with_source(source)).layer(RequestIdLayer::new());
    let server = TestServer::new(router).expect("Failed to create test server");

    let response = server.get("/health").await;

    response.assert_status_ok();
    let header = response.headers().get("X-Request-Id");
    assert!(header.is_some());
}

#[tokio::test]
async fn caller_supplied_request_id_is_echoed() {
    let source: Arc<dyn HolidaySourcePort> = Arc::new(FixedHolidaySource { dates: vec![] });
    let router = create_router(state_with_source(source)).layer(RequestIdLayer::new());
    let server = TestServer::new(router).expect("Failed to create test server");

    let id = "01890a5d-ac96-774b-bcce-b302099a8057";
    let response = server.get("/health").add_header("X-Request-Id", id).await;

    response.assert_status_ok();
    let header = response
        .headers()
        .get("X-Request-Id")
        .and_then(|v| v.to_str().ok());
    assert_eq!(header, Some(id));
}
