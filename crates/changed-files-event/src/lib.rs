//! Event context for changed-files.
//!
//! This crate reads what the runner knows about the triggering event:
//! - [`EventKind`]: pull request, push or anything else
//! - [`EventPayload`]: the webhook payload, read field by field
//! - [`RepoRef`]: the repository the step runs for
//! - [`EventContext`]: all of the above, plus base/head extraction

mod context;
mod error;
mod kind;
mod payload;

pub use context::{EventContext, RepoRef};
pub use error::{EventError, EventResult};
pub use kind::EventKind;
pub use payload::EventPayload;
