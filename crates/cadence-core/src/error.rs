use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid interval: {0} (must be at least 1)")]
    InvalidInterval(u32),

    #[error("Weekly rules require at least one selected day")]
    MissingSelectedDays,

    #[error("{0:?} rules require a month target policy")]
    MissingMonthTarget(crate::types::TimeUnit),

    #[error("End date precedes start date")]
    InvertedRange,
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
