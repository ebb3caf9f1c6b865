//! Business-calendar engine
//!
//! The pipeline is normalize, then whole days, then hours, in that fixed
//! order. [`BogotaClock`] anchors everything to the `America/Bogota` zone,
//! [`WorkCalendar`] decides which days count, and the steppers walk the
//! schedule one bounded move at a time.

pub mod calculator;
pub mod clock;
pub mod day_stepper;
pub mod hour_stepper;
pub mod normalizer;
pub mod work_calendar;

pub use calculator::{CalculationRequest, WorkdayCalculator};
pub use clock::BogotaClock;
pub use work_calendar::WorkCalendar;

/// Longest run of consecutive non-working calendar days any walk will cross.
///
/// Colombian holiday clusters are a handful of days; sixty means the feed
/// data is corrupt, so walks fail instead of scanning further.
pub const MAX_CALENDAR_WALK: u32 = 60;
