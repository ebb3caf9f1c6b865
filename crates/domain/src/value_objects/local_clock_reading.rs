//! Colombia-local wall-clock value object

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::schedule;

/// A wall-clock reading in the Colombia-local calendar, at minute precision.
///
/// The business schedule is defined in whole minutes, so seconds and finer
/// are discarded on construction. Readings carry no zone information; they
/// only make sense paired with the Bogota clock that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalClockReading {
    naive: NaiveDateTime,
}

impl LocalClockReading {
    /// Build a reading from local date and time-of-day, truncating seconds.
    #[must_use]
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            naive: date.and_time(truncate_to_minute(time)),
        }
    }

    pub(crate) fn from_naive(naive: NaiveDateTime) -> Self {
        Self::new(naive.date(), naive.time())
    }

    /// Local calendar date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.naive.date()
    }

    /// Local time of day (seconds always zero).
    #[must_use]
    pub fn time(&self) -> NaiveTime {
        self.naive.time()
    }

    /// Minutes elapsed since local midnight.
    #[must_use]
    pub fn minute_of_day(&self) -> u32 {
        schedule::minute_of_day(self.time())
    }

    /// Same local date with a different time of day.
    #[must_use]
    pub fn with_time(self, time: NaiveTime) -> Self {
        Self::new(self.date(), time)
    }

    pub(crate) fn as_naive(&self) -> NaiveDateTime {
        self.naive
    }
}

impl fmt::Display for LocalClockReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.naive.format("%Y-%m-%d %H:%M"))
    }
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    schedule::time_from_minute(schedule::minute_of_day(time))
}
