//! GitHub client error types.

use thiserror::Error;

/// GitHub client errors.
#[derive(Debug, Error)]
pub enum GithubError {
    /// The API base URL cannot be used.
    #[error("invalid GitHub API URL: {0}")]
    InvalidApiUrl(String),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or its body could not be read.
    #[error("failed to compare commits via {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A successful response carried a body that is not a comparison.
    #[error("invalid comparison response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for GitHub operations.
pub type GithubResult<T> = Result<T, GithubError>;
