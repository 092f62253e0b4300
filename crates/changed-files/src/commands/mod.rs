//! Subcommands.

pub mod classify;
pub mod run;
