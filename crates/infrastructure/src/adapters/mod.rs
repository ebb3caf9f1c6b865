//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod holiday_adapter;

pub use holiday_adapter::HolidayFeedAdapter;
