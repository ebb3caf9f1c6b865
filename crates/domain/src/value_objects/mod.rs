//! Value Objects - Immutable, identity-less domain primitives

mod holiday_set;
mod local_clock_reading;

pub use holiday_set::HolidaySet;
pub use local_clock_reading::LocalClockReading;
