//! Process-lifetime holiday cache
//!
//! The holiday list changes once a year at most, so it is fetched through
//! the source port on first use and kept for the life of the process.
//! `invalidate` clears the slot for refresh and for test isolation.

use std::sync::Arc;

use domain::HolidaySet;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::HolidaySourcePort;

/// Cached view over the external holiday source.
///
/// The empty slot distinguishes "never loaded" from "loaded, no holidays".
/// The read lock is released before fetching, so two first-callers may both
/// fetch; the source is idempotent and the last write wins with identical
/// data, so the duplicate load is tolerated rather than coordinated.
pub struct HolidayCatalog {
    source: Arc<dyn HolidaySourcePort>,
    cached: RwLock<Option<HolidaySet>>,
}

impl std::fmt::Debug for HolidayCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayCatalog")
            .field("source", &"<HolidaySourcePort>")
            .finish_non_exhaustive()
    }
}

impl HolidayCatalog {
    /// Create a catalog over the given source, initially unloaded.
    #[must_use]
    pub fn new(source: Arc<dyn HolidaySourcePort>) -> Self {
        Self {
            source,
            cached: RwLock::new(None),
        }
    }

    /// The current holiday set, fetching and caching it on first use.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::HolidaySourceUnavailable`] when the source cannot
    /// be reached or its payload does not parse as calendar dates. A failed
    /// load leaves the slot empty, so the next call retries.
    #[instrument(skip(self))]
    pub async fn current(&self) -> Result<HolidaySet, ApplicationError> {
        if let Some(set) = self.cached.read().await.as_ref() {
            debug!(holidays = set.len(), "holiday catalog cache hit");
            return Ok(set.clone());
        }

        let raw = self.source.fetch_holidays().await?;
        let set = HolidaySet::parse(raw)
            .map_err(|err| ApplicationError::HolidaySourceUnavailable(err.to_string()))?;
        debug!(holidays = set.len(), "holiday catalog loaded");

        let mut slot = self.cached.write().await;
        *slot = Some(set.clone());
        Ok(set)
    }

    /// Drop the cached set; the next call to [`Self::current`] re-fetches.
    #[instrument(skip(self))]
    pub async fn invalidate(&self) {
        let mut slot = self.cached.write().await;
        *slot = None;
        debug!("holiday catalog invalidated");
    }

    /// Whether a set has been loaded and retained.
    pub async fn is_loaded(&self) -> bool {
        self.cached.read().await.is_some()
    }
}
