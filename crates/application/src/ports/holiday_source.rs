//! Holiday source port
//!
//! Defines the interface for retrieving the Colombian national holiday list.
//! The adapter in the infrastructure layer implements it over the external
//! holiday feed.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for holiday list retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HolidaySourcePort: Send + Sync {
    /// Fetch the full holiday list as raw `YYYY-MM-DD` strings.
    ///
    /// The source is read-only and idempotent; callers may fetch it any
    /// number of times. Transport and format failures surface as
    /// [`ApplicationError::HolidaySourceUnavailable`].
    async fn fetch_holidays(&self) -> Result<Vec<String>, ApplicationError>;
}
