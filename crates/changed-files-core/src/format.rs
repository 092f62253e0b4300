//! Output serialization formats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// How each group of filenames is rendered to a single string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Filenames joined by a single space.
    SpaceDelimited,
    /// Filenames joined by commas, without quoting.
    Csv,
    /// A JSON array of strings.
    Json,
}

impl OutputFormat {
    /// All recognized formats.
    pub const ALL: [Self; 3] = [Self::SpaceDelimited, Self::Csv, Self::Json];

    /// Returns the format tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SpaceDelimited => "space-delimited",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Renders a group of filenames.
    ///
    /// Filenames are emitted as-is: no trimming, deduplication or escaping of
    /// embedded separators. An empty group renders as `""`, or `"[]"` for JSON.
    #[must_use]
    pub fn render(self, files: &[String]) -> String {
        match self {
            Self::SpaceDelimited => files.join(" "),
            Self::Csv => files.join(","),
            // Serializing a slice of strings cannot fail.
            Self::Json => serde_json::to_string(files).unwrap_or_else(|_| "[]".to_string()),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| CoreError::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
