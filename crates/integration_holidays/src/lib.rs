//! Colombian holiday feed integration
//!
//! Client for the public list of Colombian national holidays served as a
//! JSON array of `YYYY-MM-DD` strings. No API key required.

pub mod client;

pub use client::{CaptaHolidayClient, HolidayFeedClient, HolidayFeedConfig, HolidayFeedError};
