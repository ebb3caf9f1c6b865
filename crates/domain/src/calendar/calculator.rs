//! Calculation orchestration

use chrono::{DateTime, Utc};

use crate::calendar::clock::BogotaClock;
use crate::calendar::work_calendar::WorkCalendar;
use crate::calendar::{day_stepper, hour_stepper, normalizer};
use crate::errors::DomainError;

/// Largest day count a request will accept.
///
/// Keeps day stepping far inside chrono's date range while admitting any
/// count a caller could plausibly mean (a century is under 27 000 working
/// days).
pub const MAX_DAYS: u32 = 1_000_000;

/// A validated working-time addition: start instant plus day and hour counts.
///
/// Both counts default to zero and are never negative; zero counts make the
/// calculation a pure normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationRequest {
    start: DateTime<Utc>,
    days: u32,
    hours: f64,
}

impl CalculationRequest {
    /// Build a request, validating the day and hour counts.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDayCount`] for day counts above
    /// [`MAX_DAYS`], and [`DomainError::InvalidHourCount`] for negative,
    /// non-finite, or out-of-range hour counts.
    pub fn new(start: DateTime<Utc>, days: u32, hours: f64) -> Result<Self, DomainError> {
        if days > MAX_DAYS {
            return Err(DomainError::InvalidDayCount(days));
        }
        BogotaClock::minutes_from_hours(hours)?;
        Ok(Self { start, days, hours })
    }

    /// The starting instant.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Working days to add.
    #[must_use]
    pub const fn days(&self) -> u32 {
        self.days
    }

    /// Working hours to add.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.hours
    }
}

/// Facade tying normalization and the two steppers together.
///
/// The order is fixed: normalize the start, add whole working days, then
/// add working hours. Days are never applied after hours. The time of day
/// produced by normalization is preserved across day stepping.
#[derive(Debug, Clone)]
pub struct WorkdayCalculator {
    calendar: WorkCalendar,
}

impl WorkdayCalculator {
    /// Build a calculator over the given calendar.
    #[must_use]
    pub const fn new(calendar: WorkCalendar) -> Self {
        Self { calendar }
    }

    /// The calendar this calculator consults.
    #[must_use]
    pub const fn calendar(&self) -> &WorkCalendar {
        &self.calendar
    }

    /// Run the full calculation for `request`.
    ///
    /// # Errors
    ///
    /// Propagates [`DomainError`] from normalization and the steppers;
    /// with in-range inputs the computation is total.
    pub fn calculate(&self, request: &CalculationRequest) -> Result<DateTime<Utc>, DomainError> {
        let normalized = normalizer::normalize(&self.calendar, request.start())?;
        let preserve = BogotaClock::to_local(normalized).time();

        let after_days = if request.days() > 0 {
            day_stepper::add_working_days(
                &self.calendar,
                normalized,
                request.days(),
                Some(preserve),
            )?
        } else {
            normalized
        };

        if request.hours() > 0.0 {
            hour_stepper::add_working_hours(&self.calendar, after_days, request.hours())
        } else {
            Ok(after_days)
        }
    }
}
