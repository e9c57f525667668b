//! Error types for rp-persist.

use thiserror::Error;

/// Errors that can occur while reading or writing graph data.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed snapshot: {detail}")]
    Malformed { detail: String },

    #[error("negative {what} count {count} in snapshot")]
    NegativeCount { what: &'static str, count: i32 },

    #[error("edge target index {index} out of range for {count} nodes")]
    IndexOutOfRange { index: i32, count: usize },

    #[error("string of {len} bytes exceeds the 65535-byte limit")]
    StringTooLong { len: usize },

    #[error("invalid UTF-8 string: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Alias for `Result<T, PersistError>`.
pub type PersistResult<T> = Result<T, PersistError>;
