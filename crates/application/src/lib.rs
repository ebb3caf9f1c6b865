//! Application layer - Use cases and orchestration
//!
//! Wires the pure calendar engine to the outside world: the holiday-source
//! port, the process-lifetime holiday cache, and the working-days use case
//! the HTTP layer calls into.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
