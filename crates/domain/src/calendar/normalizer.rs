//! Backward normalization onto the working calendar
//!
//! An arbitrary instant is snapped backward to the nearest instant that is
//! both on a working day and inside working hours. Normalization never moves
//! time forward; landing on an earlier day at 17:00 is the only way a date
//! changes.

use chrono::{DateTime, Utc};

use crate::calendar::clock::BogotaClock;
use crate::calendar::work_calendar::WorkCalendar;
use crate::calendar::MAX_CALENDAR_WALK;
use crate::errors::DomainError;
use crate::schedule;
use crate::value_objects::LocalClockReading;

/// Snap `instant` backward to the nearest valid working instant.
///
/// Non-working dates walk back one calendar day at a time to 17:00,
/// re-checking after every step so a holiday directly before a weekend is
/// handled the same as any other run of non-working days. On a working day
/// the time of day snaps backward: before 08:00 to 08:00, inside lunch to
/// 12:00, at or after 17:00 to 17:00. Times already inside working hours
/// are untouched.
///
/// # Errors
///
/// [`DomainError::CalendarWalkExceeded`] if no working day exists within
/// [`MAX_CALENDAR_WALK`] days behind `instant`, and
/// [`DomainError::InvalidDateTime`] for dates outside the representable
/// calendar range.
pub fn normalize(
    calendar: &WorkCalendar,
    instant: DateTime<Utc>,
) -> Result<DateTime<Utc>, DomainError> {
    let mut local = BogotaClock::to_local(instant);

    let mut walked = 0u32;
    while !calendar.is_working_day(local.date()) {
        walked += 1;
        if walked > MAX_CALENDAR_WALK {
            return Err(DomainError::CalendarWalkExceeded {
                scanned: MAX_CALENDAR_WALK,
            });
        }
        let previous = local
            .date()
            .pred_opt()
            .ok_or_else(|| DomainError::invalid_datetime("calendar date underflow"))?;
        local = LocalClockReading::new(previous, schedule::work_end());
    }

    BogotaClock::from_local(local.with_time(snap_time_backward(local)))
}

fn snap_time_backward(local: LocalClockReading) -> chrono::NaiveTime {
    let minute = local.minute_of_day();
    if minute < schedule::WORK_START_MINUTE {
        schedule::work_start()
    } else if schedule::is_lunch_minute(minute) {
        schedule::lunch_start()
    } else if minute >= schedule::WORK_END_MINUTE {
        schedule::work_end()
    } else {
        local.time()
    }
}
