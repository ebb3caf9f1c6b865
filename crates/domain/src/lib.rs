//! Domain layer for Fechas Habiles
//!
//! Pure calendar arithmetic over the Colombian business schedule. This layer
//! performs no I/O and reads no clocks: every computation is a function of an
//! explicit UTC instant and a set of national holidays, which keeps it
//! deterministic and directly testable.

pub mod calendar;
pub mod errors;
pub mod schedule;
pub mod value_objects;

pub use calendar::{
    BogotaClock, CalculationRequest, WorkCalendar, WorkdayCalculator, MAX_CALENDAR_WALK,
};
pub use errors::DomainError;
pub use value_objects::{HolidaySet, LocalClockReading};

/// Convenience result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
