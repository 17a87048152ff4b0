use crate::license_compliance::domain::{ReportingContext, RepositoryRef, Trigger};
use crate::shared::error::AuditError;
use crate::shared::security::{read_regular_file, MAX_EVENT_FILE_SIZE};
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequest>,
}

#[derive(Debug, Deserialize)]
struct PullRequest {
    head: PullRequestHead,
}

#[derive(Debug, Deserialize)]
struct PullRequestHead {
    sha: String,
}

/// Run context read from the GitHub Actions environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubEnvironment {
    pub context: ReportingContext,
    pub repository: RepositoryRef,
}

impl GitHubEnvironment {
    /// Reads the context from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the context through `lookup`, which maps a variable name to its value
    ///
    /// # Errors
    /// Returns `AuditError::MissingEnvironment` when `GITHUB_EVENT_NAME`,
    /// `GITHUB_REPOSITORY` or a commit SHA is unavailable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let event_name = non_empty("GITHUB_EVENT_NAME").ok_or_else(|| missing(
            "GITHUB_EVENT_NAME",
            "Run inside GitHub Actions or export GITHUB_EVENT_NAME (e.g. `push` or `schedule`)",
        ))?;

        // GITHUB_HEAD_REF is only set for pull requests, which get a read-only token from forks
        let forked = non_empty("GITHUB_HEAD_REF").is_some();

        let slug = non_empty("GITHUB_REPOSITORY").ok_or_else(|| missing(
            "GITHUB_REPOSITORY",
            "Export GITHUB_REPOSITORY in `owner/name` form",
        ))?;

        let pr_head_sha = match non_empty("GITHUB_EVENT_PATH") {
            Some(path) => pull_request_head_sha(Path::new(&path))
                .with_context(|| format!("Failed to read event payload at {}", path))?,
            None => None,
        };
        let head_sha = pr_head_sha
            .or_else(|| non_empty("GITHUB_SHA"))
            .ok_or_else(|| missing("GITHUB_SHA", "Export GITHUB_SHA with the commit to audit"))?;

        Ok(Self {
            context: ReportingContext::new(Trigger::from_event_name(&event_name), forked),
            repository: RepositoryRef::from_slug(&slug, head_sha)?,
        })
    }
}

fn missing(name: &str, hint: &str) -> anyhow::Error {
    AuditError::MissingEnvironment {
        name: name.to_string(),
        hint: hint.to_string(),
    }
    .into()
}

/// Head commit of the pull request that triggered the run, if any
fn pull_request_head_sha(path: &Path) -> Result<Option<String>> {
    let content = read_regular_file(path, "event payload", MAX_EVENT_FILE_SIZE)?;
    let payload: EventPayload = serde_json::from_str(&content)?;
    Ok(payload.pull_request.map(|pr| pr.head.sha))
}
