//! Working-hour advancement across lunch and day boundaries

use chrono::{DateTime, Utc};

use crate::calendar::clock::BogotaClock;
use crate::calendar::work_calendar::WorkCalendar;
use crate::calendar::MAX_CALENDAR_WALK;
use crate::errors::DomainError;
use crate::schedule;
use crate::value_objects::LocalClockReading;

/// Advance `instant` by `hours` working hours (fractional allowed).
///
/// The budget converts to whole minutes on entry and every move happens in
/// minute space, so the result always lands on an exact minute. Crossing
/// lunch costs nothing: time inside 12:00 to 13:00 simply does not exist on
/// the working clock. When a day runs out at 17:00 with budget left, the
/// walk resumes at 08:00 on the next working day.
///
/// The caller is expected to hand in an instant already inside working
/// hours; out-of-hours inputs are moved to the nearest following working
/// minute before spending budget.
///
/// # Errors
///
/// [`DomainError::InvalidHourCount`] for negative or non-finite `hours`,
/// [`DomainError::CalendarWalkExceeded`] when a day rollover scans past
/// [`MAX_CALENDAR_WALK`] non-working days, [`DomainError::InvalidDateTime`]
/// on calendar-range overflow.
pub fn add_working_hours(
    calendar: &WorkCalendar,
    instant: DateTime<Utc>,
    hours: f64,
) -> Result<DateTime<Utc>, DomainError> {
    let mut remaining = BogotaClock::minutes_from_hours(hours)?;
    let mut local = BogotaClock::to_local(instant);

    while remaining > 0 {
        let minute = local.minute_of_day();

        if schedule::is_lunch_minute(minute) {
            local = local.with_time(schedule::lunch_end());
            continue;
        }
        if minute < schedule::WORK_START_MINUTE {
            local = local.with_time(schedule::work_start());
            continue;
        }
        if minute >= schedule::WORK_END_MINUTE {
            local = next_working_morning(calendar, local)?;
            continue;
        }

        let limit = if minute < schedule::LUNCH_START_MINUTE {
            schedule::LUNCH_START_MINUTE
        } else {
            schedule::WORK_END_MINUTE
        };
        let step = remaining.min(i64::from(limit - minute));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let landed = minute + step as u32;
        local = local.with_time(schedule::time_from_minute(landed));
        remaining -= step;

        if remaining > 0 {
            if landed == schedule::LUNCH_START_MINUTE {
                local = local.with_time(schedule::lunch_end());
            } else if landed >= schedule::WORK_END_MINUTE {
                local = next_working_morning(calendar, local)?;
            }
        }
    }

    BogotaClock::from_local(local)
}

/// Move to 08:00 on the next working day, skipping weekends and holidays.
fn next_working_morning(
    calendar: &WorkCalendar,
    from: LocalClockReading,
) -> Result<LocalClockReading, DomainError> {
    let mut local = from;
    let mut skipped = 0u32;
    loop {
        let next = local
            .date()
            .succ_opt()
            .ok_or_else(|| DomainError::invalid_datetime("calendar date overflow"))?;
        local = LocalClockReading::new(next, schedule::work_start());
        if calendar.is_working_day(local.date()) {
            return Ok(local);
        }
        skipped += 1;
        if skipped > MAX_CALENDAR_WALK {
            return Err(DomainError::CalendarWalkExceeded {
                scanned: MAX_CALENDAR_WALK,
            });
        }
    }
}
