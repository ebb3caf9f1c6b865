//! Colombian business-hours schedule
//!
//! The working day runs Monday through Friday from 08:00 to 17:00 local
//! time with a fixed lunch break from 12:00 to 13:00. All schedule
//! arithmetic is done in whole minutes since local midnight, which keeps
//! the stepper logic free of time-of-day edge cases.

use chrono::{Duration, NaiveTime, Timelike};

/// Minute of day at which work starts (08:00).
pub const WORK_START_MINUTE: u32 = 8 * 60;

/// Minute of day at which lunch starts (12:00).
pub const LUNCH_START_MINUTE: u32 = 12 * 60;

/// Minute of day at which lunch ends (13:00).
pub const LUNCH_END_MINUTE: u32 = 13 * 60;

/// Minute of day at which work ends (17:00). The end bound is exclusive.
pub const WORK_END_MINUTE: u32 = 17 * 60;

/// Billable minutes in a full working day (8 hours net of lunch).
pub const WORKING_MINUTES_PER_DAY: u32 =
    WORK_END_MINUTE - WORK_START_MINUTE - (LUNCH_END_MINUTE - LUNCH_START_MINUTE);

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Whether the given minute of day falls inside paid working time.
///
/// The range is half-open: 08:00 counts, 17:00 does not, and the lunch
/// hour is excluded.
///
/// # Examples
///
/// ```
/// use domain::schedule;
///
/// assert!(schedule::is_working_minute(8 * 60));
/// assert!(schedule::is_working_minute(16 * 60 + 59));
/// assert!(!schedule::is_working_minute(12 * 60));
/// assert!(!schedule::is_working_minute(17 * 60));
/// ```
#[must_use]
pub const fn is_working_minute(minute_of_day: u32) -> bool {
    minute_of_day >= WORK_START_MINUTE
        && minute_of_day < WORK_END_MINUTE
        && !is_lunch_minute(minute_of_day)
}

/// Whether the given minute of day falls inside the lunch break.
#[must_use]
pub const fn is_lunch_minute(minute_of_day: u32) -> bool {
    minute_of_day >= LUNCH_START_MINUTE && minute_of_day < LUNCH_END_MINUTE
}

/// Time of day at which work starts.
#[must_use]
pub fn work_start() -> NaiveTime {
    time_from_minute(WORK_START_MINUTE)
}

/// Time of day at which work ends.
#[must_use]
pub fn work_end() -> NaiveTime {
    time_from_minute(WORK_END_MINUTE)
}

/// Time of day at which lunch starts.
#[must_use]
pub fn lunch_start() -> NaiveTime {
    time_from_minute(LUNCH_START_MINUTE)
}

/// Time of day at which lunch ends.
#[must_use]
pub fn lunch_end() -> NaiveTime {
    time_from_minute(LUNCH_END_MINUTE)
}

/// Build a `NaiveTime` from a minute of day.
///
/// Total for any `minute_of_day < 1440`; values beyond that wrap, so
/// callers reduce modulo [`MINUTES_PER_DAY`] first.
#[must_use]
pub fn time_from_minute(minute_of_day: u32) -> NaiveTime {
    NaiveTime::MIN + Duration::minutes(i64::from(minute_of_day % MINUTES_PER_DAY))
}

/// Minute of day for a `NaiveTime`, discarding seconds.
#[must_use]
pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}
