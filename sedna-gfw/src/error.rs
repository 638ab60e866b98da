/// Error types for the sEaDNA data layer
use thiserror::Error;

/// Main error type for effort data operations
#[derive(Error, Debug)]
pub enum GfwError {
    /// Failed to parse an effort JSON export
    #[error("Failed to parse effort JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Failed to parse CSV fixture data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A record's time range carries no month component
    #[error("Time range has no month component: {0:?}")]
    MissingMonth(String),

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

/// Type alias for Results using GfwError
pub type Result<T> = std::result::Result<T, GfwError>;
