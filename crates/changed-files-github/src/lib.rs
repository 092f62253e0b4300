//! GitHub commit comparison for changed-files.
//!
//! [`GithubClient`] implements [`changed_files_core::CompareCommits`] on top
//! of the REST endpoint `GET /repos/{owner}/{repo}/compare/{base}...{head}`.

mod client;
mod error;
mod response;

pub use client::{API_VERSION, DEFAULT_API_URL, GithubClient};
pub use error::{GithubError, GithubResult};
pub use response::CompareResponse;
