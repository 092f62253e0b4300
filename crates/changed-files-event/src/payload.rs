//! Webhook payload of the triggering event.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{EventError, EventResult};

/// The JSON payload found at `GITHUB_EVENT_PATH`.
///
/// The payload shape depends on the event, so it is kept as loosely typed
/// JSON and every field is looked up level by level. A missing level, a
/// `null` or a non-string leaf all read as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPayload {
    fields: Map<String, Value>,
}

impl EventPayload {
    /// Creates a payload from a JSON object.
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Parses a payload from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or not an object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::new)
    }

    /// Loads the payload file written by the runner.
    ///
    /// No path means an empty payload. A path that does not exist is logged
    /// and also yields an empty payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a JSON
    /// object.
    pub fn load(path: Option<&Path>) -> EventResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            warn!("GITHUB_EVENT_PATH {} does not exist", path.display());
            return Ok(Self::default());
        }

        debug!(?path, "loading event payload");
        let content = std::fs::read_to_string(path)?;
        let value: Value =
            serde_json::from_str(&content).map_err(|source| EventError::InvalidPayload {
                path: path.to_path_buf(),
                source,
            })?;

        match value {
            Value::Object(fields) => Ok(Self::new(fields)),
            _ => Err(EventError::NotAnObject),
        }
    }

    /// Returns the top-level keys of the payload.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Returns true if the payload has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks up a string leaf by path.
    #[must_use]
    pub fn string_at(&self, path: &[&str]) -> Option<&str> {
        let (first, rest) = path.split_first()?;
        let mut value = self.fields.get(*first)?;
        for key in rest {
            value = value.as_object()?.get(*key)?;
        }
        value.as_str()
    }

    /// `pull_request.base.sha`
    #[must_use]
    pub fn pull_request_base_sha(&self) -> Option<&str> {
        self.string_at(&["pull_request", "base", "sha"])
    }

    /// `pull_request.head.sha`
    #[must_use]
    pub fn pull_request_head_sha(&self) -> Option<&str> {
        self.string_at(&["pull_request", "head", "sha"])
    }

    /// `before` of a push.
    #[must_use]
    pub fn before(&self) -> Option<&str> {
        self.string_at(&["before"])
    }

    /// `after` of a push.
    #[must_use]
    pub fn after(&self) -> Option<&str> {
        self.string_at(&["after"])
    }

    /// `repository.owner.login` and `repository.name`, if both are present.
    #[must_use]
    pub fn repository(&self) -> Option<(&str, &str)> {
        let owner = self.string_at(&["repository", "owner", "login"])?;
        let name = self.string_at(&["repository", "name"])?;
        Some((owner, name))
    }
}
