//! Holiday feed client
//!
//! HTTP client for the hosted Colombian holiday list.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Path of the holiday document under the configured base URL.
const FEED_PATH: &str = "/Recruitment/WorkingDays.json";

/// Holiday feed client errors
#[derive(Debug, Error)]
pub enum HolidayFeedError {
    /// Connection to the holiday feed failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the holiday feed failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the holiday feed payload
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Feed is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Holiday feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayFeedConfig {
    /// Feed base URL (default: <https://content.capta.co>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://content.capta.co".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for HolidayFeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Client trait for fetching the holiday list
#[async_trait]
pub trait HolidayFeedClient: Send + Sync {
    /// Fetch all holiday dates as raw `YYYY-MM-DD` strings.
    async fn fetch_holiday_dates(&self) -> Result<Vec<String>, HolidayFeedError>;
}

/// HTTP client implementation over the hosted feed
#[derive(Debug)]
pub struct CaptaHolidayClient {
    client: Client,
    config: HolidayFeedConfig,
}

impl CaptaHolidayClient {
    /// Create a new feed client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: HolidayFeedConfig) -> Result<Self, HolidayFeedError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| HolidayFeedError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, HolidayFeedError> {
        Self::new(HolidayFeedConfig::default())
    }

    /// Full URL of the holiday document
    fn feed_url(&self) -> String {
        format!("{}{FEED_PATH}", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl HolidayFeedClient for CaptaHolidayClient {
    #[instrument(skip(self))]
    async fn fetch_holiday_dates(&self) -> Result<Vec<String>, HolidayFeedError> {
        let url = self.feed_url();
        debug!(url = %url, "Fetching holiday list");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                HolidayFeedError::ConnectionFailed(e.to_string())
            } else {
                HolidayFeedError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_server_error() {
            return Err(HolidayFeedError::ServiceUnavailable(format!(
                "HTTP {status}"
            )));
        }
        if !status.is_success() {
            return Err(HolidayFeedError::RequestFailed(format!("HTTP {status}")));
        }

        let dates: Vec<String> = response
            .json()
            .await
            .map_err(|e| HolidayFeedError::ParseError(e.to_string()))?;

        debug!(count = dates.len(), "Holiday list fetched");
        Ok(dates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = HolidayFeedConfig::default();
        assert_eq!(config.base_url, "https://content.capta.co");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_feed_url() {
        let client = CaptaHolidayClient::with_defaults().expect("client creation should succeed");
        assert_eq!(
            client.feed_url(),
            "https://content.capta.co/Recruitment/WorkingDays.json"
        );
    }

    #[test]
    fn test_feed_url_tolerates_trailing_slash() {
        let config = HolidayFeedConfig {
            base_url: "https://content.capta.co/".to_string(),
            ..Default::default()
        };
        let client = CaptaHolidayClient::new(config).expect("client creation should succeed");
        assert_eq!(
            client.feed_url(),
            "https://content.capta.co/Recruitment/WorkingDays.json"
        );
    }

    #[test]
    fn test_client_creation() {
        assert!(CaptaHolidayClient::with_defaults().is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = HolidayFeedError::ServiceUnavailable("HTTP 503".to_string());
        assert_eq!(err.to_string(), "Service unavailable: HTTP 503");

        let err = HolidayFeedError::ParseError("expected array".to_string());
        assert!(err.to_string().contains("Parse error"));
    }

    #[test]
    fn test_config_serialization() {
        let config = HolidayFeedConfig {
            base_url: "https://mirror.example.com".to_string(),
            timeout_secs: 10,
        };

        let json = serde_json::to_string(&config).expect("should serialize");
        let deserialized: HolidayFeedConfig =
            serde_json::from_str(&json).expect("should deserialize");

        assert_eq!(deserialized.base_url, "https://mirror.example.com");
        assert_eq!(deserialized.timeout_secs, 10);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: HolidayFeedConfig = serde_json::from_str("{}").expect("should deserialize");
        assert_eq!(config.base_url, "https://content.capta.co");
        assert_eq!(config.timeout_secs, 30);
    }
}
