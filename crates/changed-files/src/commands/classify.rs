//! Classify command.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use tracing::warn;

use changed_files_config::DEFAULT_FORMAT;
use changed_files_core::{Step, StepReporter};
use changed_files_github::CompareResponse;

/// Arguments for the classify command.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Output format (space-delimited, csv, json)
    #[arg(short, long, default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Compare API response to read, or `-` for stdin
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,

    /// Event name used in failure messages
    #[arg(long, default_value = "push")]
    pub event: String,
}

/// Prints outputs as `name=value` lines and failures to a separate stream.
struct ConsoleReporter<O: Write, E: Write> {
    out: O,
    err: E,
    failed: bool,
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            failed: false,
        }
    }
}

impl<O: Write, E: Write> StepReporter for ConsoleReporter<O, E> {
    type Error = io::Error;

    fn set_failed(&mut self, message: &str) {
        self.failed = true;
        if let Err(e) = writeln!(self.err, "error: {message}") {
            warn!("failed to write failure: {e}");
        }
    }

    fn set_output(&mut self, name: &str, value: &str) -> io::Result<()> {
        writeln!(self.out, "{name}={value}")
    }
}

fn read_input(input: &Path) -> Result<Vec<u8>> {
    if input.as_os_str() == "-" {
        let mut body = Vec::new();
        io::stdin()
            .read_to_end(&mut body)
            .context("failed to read compare response from stdin")?;
        return Ok(body);
    }

    std::fs::read(input)
        .with_context(|| format!("failed to read compare response from {}", input.display()))
}

/// Classifies a saved compare response and prints the outputs.
pub fn run(args: ClassifyArgs) -> Result<ExitCode> {
    let body = read_input(&args.input)?;
    let response = CompareResponse::from_slice(&body).context("invalid compare response")?;

    let report = Step::new(args.event, &args.format).finish(response.into_comparison(200));

    let mut reporter = ConsoleReporter::new(io::stdout().lock(), io::stderr().lock());
    report
        .publish(&mut reporter)
        .context("failed to write outputs")?;

    Ok(if reporter.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
