//! Changed file entries as returned by a commit comparison.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a file changed between the base and the head commit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FileStatus {
    /// The file does not exist at base.
    Added,
    /// The file exists at both commits with different content.
    Modified,
    /// The file does not exist at head.
    Removed,
    /// The file was moved, possibly with edits.
    Renamed,
    /// Any status tag this step does not classify (`copied`, `changed`, ...).
    Other(String),
}

impl FileStatus {
    /// Returns the status tag as sent by the comparison service.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Added => "added",
            Self::Modified => "modified",
            Self::Removed => "removed",
            Self::Renamed => "renamed",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for FileStatus {
    fn from(tag: &str) -> Self {
        match tag {
            "added" => Self::Added,
            "modified" => Self::Modified,
            "removed" => Self::Removed,
            "renamed" => Self::Renamed,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FileStatus {
    fn from(tag: String) -> Self {
        match Self::from(tag.as_str()) {
            Self::Other(_) => Self::Other(tag),
            known => known,
        }
    }
}

impl From<FileStatus> for String {
    fn from(status: FileStatus) -> Self {
        match status {
            FileStatus::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file entry of a comparison.
///
/// Only the fields the classifier needs are kept; everything else the
/// comparison service sends (patch, sha, counters) is ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    /// Path of the file at head (or at base for removals).
    pub filename: String,

    /// How the file changed.
    pub status: FileStatus,
}

impl ChangedFile {
    /// Creates a new changed file entry.
    #[must_use]
    pub fn new(filename: impl Into<String>, status: impl Into<FileStatus>) -> Self {
        Self {
            filename: filename.into(),
            status: status.into(),
        }
    }
}
