//! Shared vocabulary types for the cadence recurrence engine.

pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::{MonthTarget, TimeUnit, Weekday};
