//! Fixed-zone clock for the Colombian calendar

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::America::Bogota;
use chrono_tz::Tz;

use crate::errors::DomainError;
use crate::schedule;
use crate::value_objects::LocalClockReading;

/// The IANA zone every local-time derivation goes through.
///
/// Colombia has kept a fixed UTC-5 offset since 1993, but the conversion
/// still consults the zone database instead of hard-coding the offset.
pub const COLOMBIA_ZONE: Tz = Bogota;

/// Largest hour count the clock will convert to minutes.
///
/// Keeps the minute arithmetic comfortably inside `i64` while admitting any
/// count a caller could plausibly mean (a century is under 900 000 hours).
pub const MAX_HOURS: f64 = 1_000_000.0;

/// Conversions between UTC instants and the Colombia-local wall clock.
///
/// The host machine's zone never participates; `America/Bogota` is the only
/// frame in which schedule rules are evaluated.
#[derive(Debug, Clone, Copy)]
pub struct BogotaClock;

impl BogotaClock {
    /// Project a UTC instant onto the Colombia-local wall clock.
    ///
    /// Seconds are discarded; the whole engine works at minute precision.
    #[must_use]
    pub fn to_local(instant: DateTime<Utc>) -> LocalClockReading {
        LocalClockReading::from_naive(instant.with_timezone(&COLOMBIA_ZONE).naive_local())
    }

    /// Interpret a local reading as a UTC instant.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDateTime`] if the reading falls in a
    /// zone-transition gap or maps to more than one instant. Colombia's
    /// offset has been fixed since 1993, so this only fires for readings in
    /// the historical 1992 transition window.
    pub fn from_local(reading: LocalClockReading) -> Result<DateTime<Utc>, DomainError> {
        COLOMBIA_ZONE
            .from_local_datetime(&reading.as_naive())
            .single()
            .map(|zoned| zoned.with_timezone(&Utc))
            .ok_or_else(|| {
                DomainError::invalid_datetime(format!("unrepresentable local time {reading}"))
            })
    }

    /// Interpret a local calendar date and time of day as a UTC instant.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::from_local`].
    pub fn from_parts(date: NaiveDate, time: NaiveTime) -> Result<DateTime<Utc>, DomainError> {
        Self::from_local(LocalClockReading::new(date, time))
    }

    /// Replace the local time of day, keeping the local calendar date.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::from_local`].
    pub fn set_time(instant: DateTime<Utc>, time: NaiveTime) -> Result<DateTime<Utc>, DomainError> {
        Self::from_local(Self::to_local(instant).with_time(time))
    }

    /// Add whole minutes in local-field space.
    ///
    /// The shift is applied to the local date and minute-of-day rather than
    /// to the raw instant, so results always land on exact local minute
    /// boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDateTime`] if the shifted date leaves
    /// the representable calendar range.
    pub fn add_minutes(instant: DateTime<Utc>, minutes: i64) -> Result<DateTime<Utc>, DomainError> {
        let local = Self::to_local(instant);
        let total = i64::from(local.minute_of_day()) + minutes;
        let day_shift = total.div_euclid(i64::from(schedule::MINUTES_PER_DAY));
        let minute_of_day = total.rem_euclid(i64::from(schedule::MINUTES_PER_DAY));

        let date = local
            .date()
            .checked_add_signed(chrono::Duration::days(day_shift))
            .ok_or_else(|| {
                DomainError::invalid_datetime(format!("date out of range after {minutes} minutes"))
            })?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let time = schedule::time_from_minute(minute_of_day as u32);
        Self::from_parts(date, time)
    }

    /// Add fractional hours, rounded to whole minutes, in local-field space.
    ///
    /// # Errors
    ///
    /// Rejects negative, non-finite, or absurdly large hour counts, and
    /// propagates date-range failures from [`Self::add_minutes`].
    pub fn add_hours(instant: DateTime<Utc>, hours: f64) -> Result<DateTime<Utc>, DomainError> {
        Self::add_minutes(instant, Self::minutes_from_hours(hours)?)
    }

    /// Convert a fractional hour count to whole minutes (0.5 h is 30 min).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidHourCount`] for negative, non-finite,
    /// or counts above [`MAX_HOURS`].
    pub fn minutes_from_hours(hours: f64) -> Result<i64, DomainError> {
        if !hours.is_finite() || hours < 0.0 || hours > MAX_HOURS {
            return Err(DomainError::InvalidHourCount(hours.to_string()));
        }
        #[allow(clippy::cast_possible_truncation)]
        let minutes = (hours * 60.0).round() as i64;
        Ok(minutes)
    }
}
