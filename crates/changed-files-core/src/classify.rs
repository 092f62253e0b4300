//! Partitioning of changed files by status.

use serde::Serialize;

use crate::{ChangedFile, Failure, FileStatus, OutputFormat};

/// Filenames grouped by change status.
///
/// Every group keeps the order in which the comparison returned the files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// Every filename.
    pub all: Vec<String>,
    /// Files with status `added`.
    pub added: Vec<String>,
    /// Files with status `modified`.
    pub modified: Vec<String>,
    /// Files with status `removed`.
    pub removed: Vec<String>,
    /// Files with status `renamed`.
    pub renamed: Vec<String>,
    /// Files with status `added` or `modified`, interleaved as encountered.
    pub added_or_modified: Vec<String>,
}

/// The outcome of [`classify`]: the groups plus every non-fatal failure met.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// The filename groups.
    pub result: ClassificationResult,
    /// Failures recorded while classifying, in file order.
    pub failures: Vec<Failure>,
}

/// Classifies changed files by status.
///
/// `format` is the selected output format, if valid; it only matters for the
/// space-in-filename check. Unsupported statuses and spaces are recorded as
/// failures and classification carries on with the remaining files.
#[must_use]
pub fn classify(files: &[ChangedFile], format: Option<OutputFormat>) -> Classification {
    let mut classification = Classification::default();
    let result = &mut classification.result;

    for file in files {
        let filename = &file.filename;
        result.all.push(filename.clone());

        if let Some(failure) = Failure::check_filename(format, filename) {
            classification.failures.push(failure);
        }

        match &file.status {
            FileStatus::Added => {
                result.added.push(filename.clone());
                result.added_or_modified.push(filename.clone());
            }
            FileStatus::Modified => {
                result.modified.push(filename.clone());
                result.added_or_modified.push(filename.clone());
            }
            FileStatus::Removed => result.removed.push(filename.clone()),
            FileStatus::Renamed => result.renamed.push(filename.clone()),
            FileStatus::Other(status) => {
                classification.failures.push(Failure::UnsupportedStatus {
                    filename: filename.clone(),
                    status: status.clone(),
                });
            }
        }
    }

    classification
}
