//! Core library for changed-files.
//!
//! This crate provides the classification of a commit comparison:
//! - [`ChangedFile`] and [`FileStatus`]: entries returned by the comparison
//! - [`classify`]: partitions changed files into [`ClassificationResult`] groups
//! - [`OutputFormat`]: renders each group to a single string
//! - [`Step`]: orchestrates one run of the CI step and yields a [`StepReport`]

mod classify;
mod error;
mod failure;
mod format;
mod status;
mod step;

pub use classify::{Classification, ClassificationResult, classify};
pub use error::{CoreError, CoreResult};
pub use failure::Failure;
pub use format::OutputFormat;
pub use status::{ChangedFile, FileStatus};
pub use step::{
    CommitRefs, CompareCommits, CompareRequest, Comparison, Step, StepOutputs, StepReport,
    StepReporter,
};
