use thiserror::Error;

/// bookstat error types
#[derive(Error, Debug)]
pub enum BookstatError {
    /// Failed to parse JSON/JSONL input
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid user-supplied setting
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for bookstat
pub type Result<T> = std::result::Result<T, BookstatError>;
