use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the analysis call boundary
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid grouping distance {0}: must be finite and >= 0")]
    InvalidGroupingDistance(f64),

    #[error("invalid detection settings: {0}")]
    InvalidSettings(String),

    #[error("analysis cancelled")]
    Cancelled,

    #[error("{stage} stage failed: {message}")]
    StageFailed { stage: String, message: String },
}
