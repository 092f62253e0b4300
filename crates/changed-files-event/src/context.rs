//! Event context assembled from the runner environment.

use std::path::PathBuf;

use changed_files_core::{CommitRefs, Failure};
use tracing::debug;

use crate::{EventError, EventKind, EventPayload, EventResult};

/// Owner and name of a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl RepoRef {
    /// Creates a new repository reference.
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Resolves the repository from `GITHUB_REPOSITORY`, falling back to the
    /// payload's `repository` object.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::MissingRepository`] if neither source names one.
    pub fn resolve(repository: Option<&str>, payload: &EventPayload) -> EventResult<Self> {
        if let Some(repository) = repository.filter(|r| !r.is_empty()) {
            let (owner, rest) = repository
                .split_once('/')
                .ok_or(EventError::MissingRepository)?;
            let repo = rest.split('/').next().unwrap_or(rest);
            return Ok(Self::new(owner, repo));
        }

        payload
            .repository()
            .map(|(owner, repo)| Self::new(owner, repo))
            .ok_or(EventError::MissingRepository)
    }
}

/// Everything the step needs to know about the triggering event.
#[derive(Debug, Clone)]
pub struct EventContext {
    kind: EventKind,
    payload: EventPayload,
    repository: Option<String>,
}

impl EventContext {
    /// Creates a context for an event with its payload.
    #[must_use]
    pub fn new(kind: EventKind, payload: EventPayload) -> Self {
        Self {
            kind,
            payload,
            repository: None,
        }
    }

    /// Sets the `owner/repo` slug.
    #[must_use]
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    /// Reads the context from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload file exists but cannot be loaded.
    pub fn from_env() -> EventResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the context through a variable lookup.
    ///
    /// Uses `GITHUB_EVENT_NAME`, `GITHUB_EVENT_PATH` and `GITHUB_REPOSITORY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload file exists but cannot be loaded.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> EventResult<Self> {
        let kind = EventKind::from(lookup("GITHUB_EVENT_NAME").unwrap_or_default().as_str());
        let path = lookup("GITHUB_EVENT_PATH").map(PathBuf::from);
        let payload = EventPayload::load(path.as_deref())?;

        debug!("Payload keys: {}", payload.keys().join(","));

        Ok(Self {
            kind,
            payload,
            repository: lookup("GITHUB_REPOSITORY"),
        })
    }

    /// Returns the event kind.
    #[must_use]
    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// Returns the event name.
    #[must_use]
    pub fn event_name(&self) -> &str {
        self.kind.as_str()
    }

    /// Returns the payload.
    #[must_use]
    pub fn payload(&self) -> &EventPayload {
        &self.payload
    }

    /// Resolves the repository the step runs for.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::MissingRepository`] if it cannot be determined.
    pub fn repo(&self) -> EventResult<RepoRef> {
        RepoRef::resolve(self.repository.as_deref(), &self.payload)
    }

    /// Extracts base and head from the payload.
    ///
    /// Failures are returned next to the refs rather than instead of them:
    /// when either commit is missing both refs are empty strings and the
    /// caller is expected to carry on.
    #[must_use]
    pub fn commit_refs(&self) -> (CommitRefs, Vec<Failure>) {
        let mut failures = Vec::new();

        let (base, head) = match &self.kind {
            EventKind::PullRequest => (
                self.payload.pull_request_base_sha(),
                self.payload.pull_request_head_sha(),
            ),
            EventKind::Push => (self.payload.before(), self.payload.after()),
            EventKind::Other(name) => {
                failures.push(Failure::UnsupportedEvent {
                    event: name.clone(),
                });
                (None, None)
            }
        };

        match (base.filter(|b| !b.is_empty()), head.filter(|h| !h.is_empty())) {
            (Some(base), Some(head)) => (CommitRefs::new(base, head), failures),
            _ => {
                failures.push(Failure::MissingRefs {
                    event: self.event_name().to_string(),
                });
                (CommitRefs::default(), failures)
            }
        }
    }
}
