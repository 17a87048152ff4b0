/// GitHub REST API adapters for check runs and issues
mod check_runs;
mod client;
mod issues;

pub use check_runs::{GitHubCheckRun, GitHubCheckRuns};
pub use client::GitHubClient;
pub use issues::GitHubIssues;
