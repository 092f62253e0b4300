//! Reporter error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while publishing step results.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output file could not be written.
    #[error("unable to write output file {path}: {source}")]
    OutputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output name contains the heredoc delimiter.
    #[error("Unexpected input: name should not contain the delimiter \"{0}\"")]
    DelimiterInName(String),

    /// An output value contains the heredoc delimiter.
    #[error("Unexpected input: value should not contain the delimiter \"{0}\"")]
    DelimiterInValue(String),

    /// Writing to the command stream failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for reporter operations.
pub type ReportResult<T> = Result<T, ReportError>;
