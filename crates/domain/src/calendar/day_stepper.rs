//! Whole-working-day advancement

use chrono::{DateTime, NaiveTime, Utc};

use crate::calendar::clock::BogotaClock;
use crate::calendar::work_calendar::WorkCalendar;
use crate::calendar::MAX_CALENDAR_WALK;
use crate::errors::DomainError;
use crate::schedule;
use crate::value_objects::LocalClockReading;

/// Advance `instant` by `days` working days.
///
/// Each iteration moves exactly one calendar day forward and re-anchors the
/// local time to the derived target time; only days that qualify as working
/// days decrement the remaining count, so weekends and holidays are crossed
/// without being counted. A `days` of zero is a no-op.
///
/// `preserve` carries the time of day the caller wants kept across the
/// stepping. A preserved time inside working hours is used verbatim; at or
/// after 17:00 it clamps to 17:00, inside lunch to 12:00, and anything else
/// (including `None`) targets 08:00.
///
/// # Errors
///
/// [`DomainError::CalendarWalkExceeded`] after [`MAX_CALENDAR_WALK`]
/// consecutive non-working days, [`DomainError::InvalidDateTime`] on
/// calendar-range overflow.
pub fn add_working_days(
    calendar: &WorkCalendar,
    instant: DateTime<Utc>,
    days: u32,
    preserve: Option<NaiveTime>,
) -> Result<DateTime<Utc>, DomainError> {
    let target = target_time(preserve);
    let mut local = BogotaClock::to_local(instant);
    let mut remaining = days;
    let mut skipped_in_a_row = 0u32;

    while remaining > 0 {
        let next = local
            .date()
            .succ_opt()
            .ok_or_else(|| DomainError::invalid_datetime("calendar date overflow"))?;
        local = LocalClockReading::new(next, target);

        if calendar.is_working_day(local.date()) {
            remaining -= 1;
            skipped_in_a_row = 0;
        } else {
            skipped_in_a_row += 1;
            if skipped_in_a_row > MAX_CALENDAR_WALK {
                return Err(DomainError::CalendarWalkExceeded {
                    scanned: MAX_CALENDAR_WALK,
                });
            }
        }
    }

    BogotaClock::from_local(local)
}

fn target_time(preserve: Option<NaiveTime>) -> NaiveTime {
    preserve.map_or_else(schedule::work_start, |time| {
        let minute = schedule::minute_of_day(time);
        if schedule::is_working_minute(minute) {
            schedule::time_from_minute(minute)
        } else if minute >= schedule::WORK_END_MINUTE {
            schedule::work_end()
        } else if schedule::is_lunch_minute(minute) {
            schedule::lunch_start()
        } else {
            schedule::work_start()
        }
    })
}
