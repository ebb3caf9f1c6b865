//! Holiday feed adapter - Implements HolidaySourcePort using integration_holidays

use application::error::ApplicationError;
use application::ports::HolidaySourcePort;
use async_trait::async_trait;
use integration_holidays::{
    CaptaHolidayClient, HolidayFeedClient, HolidayFeedConfig, HolidayFeedError,
};
use tracing::{debug, instrument};

/// Adapter for the remote Colombian holiday feed
pub struct HolidayFeedAdapter {
    client: CaptaHolidayClient,
}

impl std::fmt::Debug for HolidayFeedAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayFeedAdapter")
            .field("client", &"CaptaHolidayClient")
            .finish()
    }
}

impl HolidayFeedAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = CaptaHolidayClient::with_defaults()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: HolidayFeedConfig) -> Result<Self, ApplicationError> {
        let client = CaptaHolidayClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map an integration feed error to an application error
    ///
    /// Every feed failure makes the holiday catalog unavailable, whether
    /// the cause was network, upstream status, or a malformed payload.
    /// The variant's display text is preserved for diagnostics.
    fn map_error(err: HolidayFeedError) -> ApplicationError {
        ApplicationError::HolidaySourceUnavailable(err.to_string())
    }
}

#[async_trait]
impl HolidaySourcePort for HolidayFeedAdapter {
    #[instrument(skip(self))]
    async fn fetch_holidays(&self) -> Result<Vec<String>, ApplicationError> {
        let result = self
            .client
            .fetch_holiday_dates()
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(dates) => {
                debug!(count = dates.len(), "Retrieved holiday feed");
            },
            Err(e) => {
                debug!(error = %e, "Failed to retrieve holiday feed");
            },
        }

        result
    }
}
