//! Configuration schema.

use serde::{Deserialize, Serialize};

/// Main configuration structure.
///
/// Every value is optional; step inputs and flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// GitHub API configuration.
    #[serde(default)]
    pub github: GithubConfig,

    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// GitHub API configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubConfig {
    /// API root, for GitHub Enterprise Server.
    #[serde(default)]
    pub api_url: Option<String>,
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when the workflow does not set one.
    #[serde(default)]
    pub format: Option<String>,
}
