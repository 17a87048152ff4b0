use crate::shared::error::ExitCode;
use std::fmt;

/// Where the findings of a run were published
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportChannel {
    /// A check run attached to the commit
    CheckRun,
    /// The check run could not be started from a fork; report went to the log
    InlineLog,
    /// One issue per new violation
    Issues,
}

impl fmt::Display for ReportChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportChannel::CheckRun => write!(f, "check run"),
            ReportChannel::InlineLog => write!(f, "inline log"),
            ReportChannel::Issues => write!(f, "issues"),
        }
    }
}

/// Whether the run as a whole passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

/// What happened to one violation on the issue path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueOutcome {
    Created { dependency: String, url: String },
    SkippedDuplicate { dependency: String },
}

impl IssueOutcome {
    pub fn dependency(&self) -> &str {
        match self {
            IssueOutcome::Created { dependency, .. } => dependency,
            IssueOutcome::SkippedDuplicate { dependency } => dependency,
        }
    }
}

/// Result of reporting a violation set
///
/// Violations found are a policy result, not an error: technical failures
/// travel through `Result::Err`, this value only describes a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditOutcome {
    pub channel: ReportChannel,
    pub verdict: Verdict,
    pub violations_found: bool,
    pub detail: String,
    pub issues: Vec<IssueOutcome>,
}

impl AuditOutcome {
    pub fn passed(channel: ReportChannel, violations_found: bool, detail: impl Into<String>) -> Self {
        Self {
            channel,
            verdict: Verdict::Pass,
            violations_found,
            detail: detail.into(),
            issues: Vec::new(),
        }
    }

    pub fn failed(channel: ReportChannel, detail: impl Into<String>) -> Self {
        Self {
            channel,
            verdict: Verdict::Fail,
            violations_found: true,
            detail: detail.into(),
            issues: Vec::new(),
        }
    }

    pub fn with_issues(mut self, issues: Vec<IssueOutcome>) -> Self {
        self.issues = issues;
        self
    }

    pub fn is_failure(&self) -> bool {
        self.verdict == Verdict::Fail
    }

    pub fn exit_code(&self) -> ExitCode {
        match self.verdict {
            Verdict::Pass => ExitCode::Success,
            Verdict::Fail => ExitCode::ViolationsDetected,
        }
    }

    pub fn created_issues(&self) -> impl Iterator<Item = &IssueOutcome> {
        self.issues
            .iter()
            .filter(|o| matches!(o, IssueOutcome::Created { .. }))
    }
}
