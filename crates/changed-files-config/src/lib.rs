//! Step inputs and configuration for changed-files.
//!
//! This crate resolves what the step runs with:
//! - [`StepInputs`]: the `token` and `format` inputs given by the workflow
//! - [`Config`]: the optional `changed-files.toml` file

mod error;
mod inputs;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use inputs::{DEFAULT_FORMAT, InputOverrides, StepInputs, get_input};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config, find_and_load_config_from, load_config};
pub use schema::{Config, GithubConfig, OutputConfig};
