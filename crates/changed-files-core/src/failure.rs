//! Step failures.
//!
//! A [`Failure`] is reported to the runner but does not stop the step: the run
//! carries on with whatever data it has. Only [`Failure::NoChanges`] and
//! [`Failure::Uncaught`] end a run, and that is decided by the orchestrator,
//! not by the failure itself.

use thiserror::Error;

use crate::OutputFormat;

/// A condition reported through `setFailed`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// The `format` input is not a recognized [`OutputFormat`].
    #[error(
        "Format must be one of 'space-delimited', 'csv', or 'json', got '{0}'."
    )]
    InvalidFormat(String),

    /// The triggering event is neither a pull request nor a push.
    #[error(
        "This action only supports pull requests and pushes, {event} events are not supported. \
         Please submit an issue on this action's GitHub repo if you believe this is correct."
    )]
    UnsupportedEvent { event: String },

    /// Base or head could not be extracted from the payload.
    #[error(
        "The base and head commits are missing from the payload for this {event} event. Please submit an issue on this action's GitHub repo."
    )]
    MissingRefs { event: String },

    /// The comparison service answered with a status other than 200.
    #[error(
        "The GitHub API for comparing the base and head commits for this {event} event returned {status}, expected 200. Please submit an issue on this action's GitHub repo."
    )]
    ComparisonFailed { event: String, status: u16 },

    /// Head is not strictly ahead of base.
    #[error(
        "The head commit for this {event} event is not ahead of the base commit. Please submit an issue on this action's GitHub repo."
    )]
    NotAhead { event: String },

    /// The comparison carried no file list.
    #[error(
        "The GitHub API response does not contain any files for this {event} event. Please submit an issue on this action's GitHub repo."
    )]
    NoChanges { event: String },

    /// A filename contains a space while the space-delimited format is selected.
    #[error(
        "One of your files includes a space: '{filename}'. \
         Consider using a different output format or removing spaces from your filenames."
    )]
    SpaceInFilename { filename: String },

    /// A changed file carries a status outside the classified set.
    #[error(
        "One of your files includes an unsupported file status '{status}', expected 'added', 'modified', 'removed', or 'renamed'."
    )]
    UnsupportedStatus { filename: String, status: String },

    /// Any other error, reported with its message.
    #[error("{0}")]
    Uncaught(String),
}

impl Failure {
    /// Wraps a foreign error message, substituting a generic one when empty.
    #[must_use]
    pub fn uncaught(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Uncaught("An unexpected error occurred".to_string())
        } else {
            Self::Uncaught(message)
        }
    }

    /// Returns true if this failure ends the run without outputs.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::NoChanges { .. } | Self::Uncaught(_))
    }

    /// Checks a filename against the selected format.
    pub(crate) fn check_filename(format: Option<OutputFormat>, filename: &str) -> Option<Self> {
        (format == Some(OutputFormat::SpaceDelimited) && filename.contains(' ')).then(|| {
            Self::SpaceInFilename {
                filename: filename.to_string(),
            }
        })
    }
}
