//! CLI definition.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// List the files changed by a pull request or push.
#[derive(Debug, Parser)]
#[command(name = "changed-files")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the step against the triggering event
    Run(commands::run::RunArgs),

    /// Classify a saved compare API response
    Classify(commands::classify::ClassifyArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<ExitCode> {
        match self.command {
            Commands::Run(args) => commands::run::run(args),
            Commands::Classify(args) => commands::classify::run(args),
        }
    }
}
