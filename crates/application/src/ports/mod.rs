//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod holiday_source;

pub use holiday_source::HolidaySourcePort;
#[cfg(test)]
pub use holiday_source::MockHolidaySourcePort;
