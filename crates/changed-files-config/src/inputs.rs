//! Workflow step inputs.
//!
//! The runner exposes each `with:` input as an `INPUT_<NAME>` environment
//! variable, the name uppercased with spaces replaced by underscores.

use secrecy::SecretString;
use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Format used when neither the workflow nor the config file sets one.
pub const DEFAULT_FORMAT: &str = "space-delimited";

/// Reads one step input through `lookup`.
///
/// The value is trimmed. An unset input reads as the empty string.
///
/// # Errors
///
/// Returns [`ConfigError::MissingInput`] if `required` and the value is empty.
pub fn get_input(
    name: &str,
    required: bool,
    lookup: impl Fn(&str) -> Option<String>,
) -> ConfigResult<String> {
    let var = format!("INPUT_{}", name.replace(' ', "_").to_uppercase());
    let value = lookup(&var).unwrap_or_default().trim().to_string();

    if required && value.is_empty() {
        return Err(ConfigError::MissingInput(name.to_string()));
    }

    Ok(value)
}

/// Values given on the command line, taking precedence over inputs.
#[derive(Debug, Default)]
pub struct InputOverrides {
    pub token: Option<SecretString>,
    pub format: Option<String>,
}

/// The resolved inputs of a step run.
#[derive(Debug)]
pub struct StepInputs {
    /// Token used to call the GitHub API.
    pub token: SecretString,
    /// Raw output format, validated when the step starts.
    pub format: String,
}

impl StepInputs {
    /// Resolves inputs from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is supplied.
    pub fn from_env(overrides: InputOverrides, config: &Config) -> ConfigResult<Self> {
        Self::from_lookup(overrides, config, |name| std::env::var(name).ok())
    }

    /// Resolves inputs through a variable lookup.
    ///
    /// The token comes from the override or the `token` input and is
    /// required. The format comes from the override, the `format` input, the
    /// config file or [`DEFAULT_FORMAT`], in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is supplied.
    pub fn from_lookup(
        overrides: InputOverrides,
        config: &Config,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<Self> {
        let token = match overrides.token {
            Some(token) => token,
            None => SecretString::from(get_input("token", true, &lookup)?),
        };

        let format = overrides
            .format
            .or_else(|| get_input("format", false, &lookup).ok().filter(|f| !f.is_empty()))
            .or_else(|| config.output.format.clone())
            .unwrap_or_else(|| DEFAULT_FORMAT.to_string());

        debug!(%format, "resolved step inputs");

        Ok(Self { token, format })
    }
}
