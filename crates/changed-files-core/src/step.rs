//! Step orchestration.
//!
//! A [`Step`] runs one classification: it asks a [`CompareCommits`]
//! implementation for the comparison, validates it, classifies and formats the
//! files, and collects every failure along the way into a [`StepReport`]. The
//! report is then handed to a [`StepReporter`].

use std::fmt;
use std::future::Future;

use tracing::{debug, info};

use crate::{ChangedFile, ClassificationResult, Failure, OutputFormat, classify};

/// Base and head commit identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitRefs {
    /// The earlier commit.
    pub base: String,
    /// The later commit.
    pub head: String,
}

impl CommitRefs {
    /// Creates a new pair of commit references.
    #[must_use]
    pub fn new(base: impl Into<String>, head: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            head: head.into(),
        }
    }
}

/// Parameters of a comparison request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareRequest {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Commits to compare.
    pub refs: CommitRefs,
}

/// The answer of the comparison service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    /// HTTP status code of the response.
    pub http_status: u16,
    /// Relationship of head to base (`ahead`, `behind`, `diverged`, `identical`).
    pub status: Option<String>,
    /// The changed files, if the response carried a file list.
    pub files: Option<Vec<ChangedFile>>,
}

/// Computes the file-level changes between two commits.
pub trait CompareCommits {
    /// Transport or decoding error.
    type Error: fmt::Display;

    /// Compares `request.refs.base` with `request.refs.head`.
    fn compare(
        &self,
        request: &CompareRequest,
    ) -> impl Future<Output = Result<Comparison, Self::Error>> + Send;
}

/// Receives failures and outputs of a step.
pub trait StepReporter {
    /// Error raised while writing an output.
    type Error;

    /// Marks the step as failed with a message.
    fn set_failed(&mut self, message: &str);

    /// Sets a named step output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), Self::Error>;
}

/// The formatted groups, one string per output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepOutputs {
    pub all: String,
    pub added: String,
    pub modified: String,
    pub removed: String,
    pub renamed: String,
    pub added_modified: String,
}

impl StepOutputs {
    /// Renders every group of `result`.
    ///
    /// Without a valid format every output is the empty string.
    #[must_use]
    pub fn render(result: &ClassificationResult, format: Option<OutputFormat>) -> Self {
        let render = |files: &[String]| format.map(|f| f.render(files)).unwrap_or_default();

        Self {
            all: render(&result.all),
            added: render(&result.added),
            modified: render(&result.modified),
            removed: render(&result.removed),
            renamed: render(&result.renamed),
            added_modified: render(&result.added_or_modified),
        }
    }

    /// Returns the named outputs in publishing order.
    ///
    /// `deleted` is kept as an alias of `removed` for older workflows.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("all", self.all.as_str()),
            ("added", self.added.as_str()),
            ("modified", self.modified.as_str()),
            ("removed", self.removed.as_str()),
            ("renamed", self.renamed.as_str()),
            ("added_modified", self.added_modified.as_str()),
            ("deleted", self.removed.as_str()),
        ]
    }

    fn log(&self) {
        info!("All: {}", self.all);
        info!("Added: {}", self.added);
        info!("Modified: {}", self.modified);
        info!("Removed: {}", self.removed);
        info!("Renamed: {}", self.renamed);
        info!("Added or modified: {}", self.added_modified);
    }
}

/// Everything a step run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Failures in the order they occurred.
    pub failures: Vec<Failure>,
    /// The outputs, unless the run ended early.
    pub outputs: Option<StepOutputs>,
}

impl StepReport {
    /// Returns true if no failure was recorded.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Sends failures, then outputs, to `reporter`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while setting an output.
    pub fn publish<R: StepReporter + ?Sized>(&self, reporter: &mut R) -> Result<(), R::Error> {
        for failure in &self.failures {
            reporter.set_failed(&failure.to_string());
        }

        if let Some(outputs) = &self.outputs {
            for (name, value) in outputs.entries() {
                reporter.set_output(name, value)?;
            }
        }

        Ok(())
    }
}

/// One run of the changed-files step.
#[derive(Debug, Clone)]
pub struct Step {
    event: String,
    format: Option<OutputFormat>,
    failures: Vec<Failure>,
}

impl Step {
    /// Creates a step for `event` with the raw `format` input.
    ///
    /// An unrecognized format is recorded as a failure; the step then runs
    /// without a format and renders empty outputs.
    #[must_use]
    pub fn new(event: impl Into<String>, format: &str) -> Self {
        let mut failures = Vec::new();
        let format = match format.parse::<OutputFormat>() {
            Ok(format) => Some(format),
            Err(_) => {
                failures.push(Failure::InvalidFormat(format.to_string()));
                None
            }
        };

        Self {
            event: event.into(),
            format,
            failures,
        }
    }

    /// Returns the event name.
    #[must_use]
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Returns the selected format, if valid.
    #[must_use]
    pub fn format(&self) -> Option<OutputFormat> {
        self.format
    }

    /// Returns the failures recorded so far.
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Records failures found before the comparison.
    pub fn record(&mut self, failures: impl IntoIterator<Item = Failure>) {
        self.failures.extend(failures);
    }

    /// Ends the run early with `failure` and no outputs.
    #[must_use]
    pub fn abort(mut self, failure: Failure) -> StepReport {
        self.failures.push(failure);
        StepReport {
            failures: self.failures,
            outputs: None,
        }
    }

    /// Runs the comparison and classifies its result.
    pub async fn run<C: CompareCommits>(self, client: &C, request: &CompareRequest) -> StepReport {
        info!("Base commit: {}", request.refs.base);
        info!("Head commit: {}", request.refs.head);

        match client.compare(request).await {
            Ok(comparison) => self.finish(comparison),
            Err(e) => self.abort(Failure::uncaught(e.to_string())),
        }
    }

    /// Validates, classifies and formats a comparison.
    #[must_use]
    pub fn finish(mut self, comparison: Comparison) -> StepReport {
        debug!(
            http_status = comparison.http_status,
            status = ?comparison.status,
            files = comparison.files.as_ref().map(Vec::len),
            "received comparison"
        );

        if comparison.http_status != 200 {
            self.failures.push(Failure::ComparisonFailed {
                event: self.event.clone(),
                status: comparison.http_status,
            });
        }

        if comparison.status.as_deref() != Some("ahead") {
            self.failures.push(Failure::NotAhead {
                event: self.event.clone(),
            });
        }

        let Some(files) = comparison.files else {
            let failure = Failure::NoChanges {
                event: self.event.clone(),
            };
            return self.abort(failure);
        };

        let classification = classify(&files, self.format);
        self.failures.extend(classification.failures);

        let outputs = StepOutputs::render(&classification.result, self.format);
        outputs.log();

        StepReport {
            failures: self.failures,
            outputs: Some(outputs),
        }
    }
}
