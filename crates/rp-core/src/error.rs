//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` where a core
//! validation failure can surface through them.

use thiserror::Error;

/// Errors produced by `rp-core` validation helpers.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown block face {0:?}")]
    UnknownFace(String),
}

/// Shorthand result type for `rp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
