//! Event error types.

use thiserror::Error;

/// Event-related errors.
#[derive(Debug, Error)]
pub enum EventError {
    /// The repository could not be determined.
    #[error("context.repo requires a GITHUB_REPOSITORY environment variable like 'owner/repo'")]
    MissingRepository,

    /// The payload file is not valid JSON.
    #[error("invalid event payload in {path}: {source}")]
    InvalidPayload {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The payload is valid JSON but not an object.
    #[error("event payload must be a JSON object")]
    NotAnObject,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for event operations.
pub type EventResult<T> = Result<T, EventError>;
