//! Working-days service
//!
//! The use case behind the public API: load the holiday calendar, run the
//! calculation, hand back the resulting instant.

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};
use domain::{CalculationRequest, WorkCalendar, WorkdayCalculator};
use tracing::{info, instrument};

use crate::error::ApplicationError;
use crate::services::HolidayCatalog;

/// Orchestrates holiday loading and the calendar calculation.
pub struct WorkingDaysService {
    catalog: Arc<HolidayCatalog>,
}

impl fmt::Debug for WorkingDaysService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkingDaysService").finish_non_exhaustive()
    }
}

impl WorkingDaysService {
    /// Create a new working-days service
    #[must_use]
    pub fn new(catalog: Arc<HolidayCatalog>) -> Self {
        Self { catalog }
    }

    /// Add working days and hours to the request's start instant.
    ///
    /// Holidays come from the catalog (cached after first use); the
    /// computation itself is pure and synchronous.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::HolidaySourceUnavailable`] when the holiday list
    /// cannot be loaded, [`ApplicationError::Domain`] for calculation
    /// failures.
    #[instrument(skip(self, request), fields(days = request.days(), hours = request.hours()))]
    pub async fn add_working_time(
        &self,
        request: &CalculationRequest,
    ) -> Result<DateTime<Utc>, ApplicationError> {
        let holidays = self.catalog.current().await?;
        let calculator = WorkdayCalculator::new(WorkCalendar::new(holidays));
        let result = calculator.calculate(request)?;
        info!(start = %request.start(), result = %result, "working time added");
        Ok(result)
    }

    /// Probe the holiday source, loading the catalog if needed.
    ///
    /// Used by readiness checks; returns the number of known holidays.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::HolidaySourceUnavailable`] when the list cannot
    /// be loaded.
    #[instrument(skip(self))]
    pub async fn probe_holiday_source(&self) -> Result<usize, ApplicationError> {
        self.catalog.current().await.map(|set| set.len())
    }

    /// Drop the cached holiday list, forcing a re-fetch on next use.
    pub async fn invalidate_holidays(&self) {
        self.catalog.invalidate().await;
    }
}
