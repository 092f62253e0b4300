//! Step reporter for the GitHub Actions runner.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use changed_files_core::StepReporter;
use tracing::warn;
use uuid::Uuid;

use crate::{ReportError, ReportResult, format_command};

/// Publishes failures and outputs through workflow commands.
///
/// Outputs go to the file named by `GITHUB_OUTPUT` when the runner provides
/// one, and to the legacy `::set-output` command otherwise.
pub struct ActionsReporter<W: Write = io::Stdout> {
    out: W,
    output_file: Option<PathBuf>,
    failed: bool,
}

impl ActionsReporter {
    /// Creates a reporter writing commands to stdout, using `GITHUB_OUTPUT`
    /// if it is set.
    #[must_use]
    pub fn from_env() -> Self {
        let output_file = std::env::var_os("GITHUB_OUTPUT")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        Self::new(io::stdout(), output_file)
    }
}

impl<W: Write> ActionsReporter<W> {
    /// Creates a reporter writing commands to `out`.
    #[must_use]
    pub fn new(out: W, output_file: Option<PathBuf>) -> Self {
        Self {
            out,
            output_file,
            failed: false,
        }
    }

    /// Returns true once any failure was reported.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Returns the output file, if any.
    #[must_use]
    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.as_deref()
    }

    /// Consumes the reporter, returning the command stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn append_to_file(path: &Path, name: &str, value: &str) -> ReportResult<()> {
        let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());

        if name.contains(&delimiter) {
            return Err(ReportError::DelimiterInName(delimiter));
        }
        if value.contains(&delimiter) {
            return Err(ReportError::DelimiterInValue(delimiter));
        }

        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|source| ReportError::OutputFile {
                path: path.to_path_buf(),
                source,
            })?;

        writeln!(file, "{name}<<{delimiter}\n{value}\n{delimiter}").map_err(|source| {
            ReportError::OutputFile {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}

impl<W: Write> StepReporter for ActionsReporter<W> {
    type Error = ReportError;

    fn set_failed(&mut self, message: &str) {
        self.failed = true;
        if let Err(e) = writeln!(self.out, "{}", format_command("error", &[], message)) {
            warn!("failed to write error command: {e}");
        }
    }

    fn set_output(&mut self, name: &str, value: &str) -> ReportResult<()> {
        match &self.output_file {
            Some(path) => Self::append_to_file(path, name, value),
            None => {
                writeln!(self.out)?;
                writeln!(
                    self.out,
                    "{}",
                    format_command("set-output", &[("name", name)], value)
                )?;
                Ok(())
            }
        }
    }
}
