//! changed-files CLI - List the files changed by a pull request or push.

use std::process::ExitCode;

use anyhow::Result;
use changed_files_actions::WorkflowFormat;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

/// Environment variable overriding the log filter.
const LOG_ENV: &str = "CHANGED_FILES_LOG";

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);
    cli.run()
}

fn init_logging(verbose: bool) {
    let runner_debug = std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1");
    let default_level = if verbose || runner_debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // Inside a workflow, commands must reach the runner on stdout.
    if std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .event_format(WorkflowFormat)
            .with_writer(std::io::stdout)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
