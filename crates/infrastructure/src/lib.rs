//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and owns the
//! runtime configuration. Contains the adapter wiring the application
//! to the remote Colombian holiday feed.

pub mod adapters;
pub mod config;

pub use adapters::HolidayFeedAdapter;
pub use config::{AppConfig, ServerConfig};
