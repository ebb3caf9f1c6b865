//! Application services - Use case implementations

mod holiday_catalog;
mod working_days_service;

pub use holiday_catalog::HolidayCatalog;
pub use working_days_service::WorkingDaysService;
