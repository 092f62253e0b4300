//! Triggering event kinds.

use std::fmt;

/// The kind of event that triggered the workflow.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// `pull_request`
    PullRequest,
    /// `push`
    Push,
    /// Any other event name, kept verbatim.
    Other(String),
}

impl EventKind {
    /// Returns the event name as set in `GITHUB_EVENT_NAME`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PullRequest => "pull_request",
            Self::Push => "push",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for EventKind {
    fn from(name: &str) -> Self {
        match name {
            "pull_request" => Self::PullRequest,
            "push" => Self::Push,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
