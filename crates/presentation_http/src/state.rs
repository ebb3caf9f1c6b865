//! Application state shared across handlers

use std::sync::Arc;

use application::WorkingDaysService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Working-days calculation service
    pub working_days: Arc<WorkingDaysService>,
}

impl AppState {
    /// Create state around a working-days service
    #[must_use]
    pub fn new(working_days: Arc<WorkingDaysService>) -> Self {
        Self { working_days }
    }
}
