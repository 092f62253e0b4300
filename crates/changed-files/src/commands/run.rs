//! Run command.

use std::fmt::Display;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use secrecy::SecretString;
use tracing::debug;

use changed_files_actions::ActionsReporter;
use changed_files_config::{InputOverrides, StepInputs, find_and_load_config};
use changed_files_core::{CompareRequest, Failure, Step, StepReport};
use changed_files_event::EventContext;
use changed_files_github::{DEFAULT_API_URL, GithubClient};

/// Arguments for the run command.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Output format (space-delimited, csv, json), overriding the `format` input
    #[arg(short, long)]
    pub format: Option<String>,

    /// GitHub token, overriding the `token` input
    #[arg(long)]
    pub token: Option<String>,

    /// GitHub API root
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,
}

/// Runs the step and publishes its report to the runner.
pub fn run(args: RunArgs) -> Result<ExitCode> {
    let rt = tokio::runtime::Runtime::new().context("failed to create async runtime")?;
    let report = rt.block_on(run_async(args));

    let mut reporter = ActionsReporter::from_env();
    debug!(output_file = ?reporter.output_file(), "publishing step report");
    report
        .publish(&mut reporter)
        .context("failed to publish step outputs")?;

    Ok(if reporter.failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// A report made of one uncaught failure.
fn uncaught(error: impl Display) -> StepReport {
    StepReport {
        failures: vec![Failure::uncaught(error.to_string())],
        outputs: None,
    }
}

async fn run_async(args: RunArgs) -> StepReport {
    let config = match find_and_load_config() {
        Ok(config) => config,
        Err(e) => return uncaught(e),
    };

    let overrides = InputOverrides {
        token: args.token.map(SecretString::from),
        format: args.format,
    };
    let inputs = match StepInputs::from_env(overrides, &config) {
        Ok(inputs) => inputs,
        Err(e) => return uncaught(e),
    };

    let context = match EventContext::from_env() {
        Ok(context) => context,
        Err(e) => return uncaught(e),
    };

    let mut step = Step::new(context.event_name(), &inputs.format);
    let (refs, failures) = context.commit_refs();
    step.record(failures);

    let repo = match context.repo() {
        Ok(repo) => repo,
        Err(e) => return step.abort(Failure::uncaught(e.to_string())),
    };

    let api_url = args
        .api_url
        .or(config.github.api_url)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let client = match GithubClient::new(&api_url, inputs.token) {
        Ok(client) => client,
        Err(e) => return step.abort(Failure::uncaught(e.to_string())),
    };
    debug!(api_url = %client.api_url(), owner = %repo.owner, repo = %repo.repo, "resolved repository");

    let request = CompareRequest {
        owner: repo.owner,
        repo: repo.repo,
        refs,
    };

    step.run(&client, &request).await
}
