//! Working-day and working-hour predicates

use chrono::{Datelike, NaiveDate, Weekday};

use crate::schedule;
use crate::value_objects::{HolidaySet, LocalClockReading};

/// The Colombian work calendar: Monday through Friday, minus holidays.
///
/// Weekday and schedule rules are fixed; the holiday set is the only
/// injected state, which keeps the calendar trivial to fake in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkCalendar {
    holidays: HolidaySet,
}

impl WorkCalendar {
    /// Build a calendar over the given holiday set.
    #[must_use]
    pub const fn new(holidays: HolidaySet) -> Self {
        Self { holidays }
    }

    /// The holiday set this calendar consults.
    #[must_use]
    pub const fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Monday through Friday on the Colombia-local calendar.
    #[must_use]
    pub fn is_weekday(date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Whether the date appears in the holiday set.
    #[must_use]
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(date)
    }

    /// Weekday and not a holiday.
    #[must_use]
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        Self::is_weekday(date) && !self.is_holiday(date)
    }

    /// Whether the local reading falls inside paid working hours.
    #[must_use]
    pub fn is_working_hours(reading: LocalClockReading) -> bool {
        schedule::is_working_minute(reading.minute_of_day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekdays_are_monday_through_friday() {
        assert!(WorkCalendar::is_weekday(date(2025, 1, 13))); // Mon
        assert!(WorkCalendar::is_weekday(date(2025, 1, 17))); // Fri
        assert!(!WorkCalendar::is_weekday(date(2025, 1, 11))); // Sat
        assert!(!WorkCalendar::is_weekday(date(2025, 1, 12))); // Sun
    }

    #[test]
    fn holidays_are_never_working_days() {
        let calendar = WorkCalendar::new(HolidaySet::parse(["2025-01-06"]).unwrap());
        // Epiphany 2025 falls on a Monday
        assert!(WorkCalendar::is_weekday(date(2025, 1, 6)));
        assert!(calendar.is_holiday(date(2025, 1, 6)));
        assert!(!calendar.is_working_day(date(2025, 1, 6)));
    }

    #[test]
    fn plain_weekdays_are_working_days() {
        let calendar = WorkCalendar::new(HolidaySet::parse(["2025-01-06"]).unwrap());
        assert!(calendar.is_working_day(date(2025, 1, 7)));
        assert!(!calendar.is_working_day(date(2025, 1, 11)));
    }

    #[test]
    fn empty_calendar_treats_all_weekdays_as_working() {
        let calendar = WorkCalendar::default();
        assert!(calendar.is_working_day(date(2025, 1, 6)));
        assert!(!calendar.is_working_day(date(2025, 1, 12)));
    }

    #[test]
    fn working_hours_respect_schedule_bounds() {
        let at = |h, m| {
            LocalClockReading::new(date(2025, 1, 13), NaiveTime::from_hms_opt(h, m, 0).unwrap())
        };
        assert!(WorkCalendar::is_working_hours(at(8, 0)));
        assert!(WorkCalendar::is_working_hours(at(11, 59)));
        assert!(!WorkCalendar::is_working_hours(at(12, 0)));
        assert!(!WorkCalendar::is_working_hours(at(12, 59)));
        assert!(WorkCalendar::is_working_hours(at(13, 0)));
        assert!(WorkCalendar::is_working_hours(at(16, 59)));
        assert!(!WorkCalendar::is_working_hours(at(17, 0)));
        assert!(!WorkCalendar::is_working_hours(at(7, 59)));
    }
}
