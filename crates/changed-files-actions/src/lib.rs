//! GitHub Actions runner protocol for changed-files.
//!
//! This crate speaks the workflow command protocol:
//! - [`ActionsReporter`]: `::error::` failures and step outputs
//! - [`WorkflowFormat`]: log events as `::debug::` / `::warning::` lines
//! - [`escape_data`] / [`escape_property`]: command value escaping

mod command;
mod error;
mod log_format;
mod reporter;

pub use command::{escape_data, escape_property, format_command};
pub use error::{ReportError, ReportResult};
pub use log_format::WorkflowFormat;
pub use reporter::ActionsReporter;
