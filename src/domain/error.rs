// Domain error types
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("unknown metric: {0}")]
    UnknownMetric(String),

    #[error("device {0} not found")]
    DeviceNotFound(usize),

    #[error("calibration failed: {0}")]
    Calibration(String),

    #[error("unknown medical condition: {0}")]
    UnknownCondition(String),

    #[error("invalid patient record: {0}")]
    InvalidPatient(String),

    #[error("invalid threshold table: {0}")]
    InvalidThresholds(String),

    #[error(transparent)]
    Series(#[from] SeriesError),
}

/// Contract violations of the series reducer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeriesError {
    #[error("window size must be positive")]
    EmptyWindow,

    #[error("sampling interval must not be negative, got {0}s")]
    NegativeInterval(i64),

    #[error("reading time falls outside the representable range")]
    TimeOutOfRange,
}
