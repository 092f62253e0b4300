//! Core error types.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Output format tag is not recognized.
    #[error("unknown output format: '{0}'")]
    UnknownFormat(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
