use crate::shared::Result;
use async_trait::async_trait;

/// Status a check run is started with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Queued,
    InProgress,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Queued => "queued",
            CheckStatus::InProgress => "in_progress",
        }
    }
}

/// Final conclusion of a completed check run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckConclusion {
    Success,
    Failure,
    Cancelled,
}

impl CheckConclusion {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckConclusion::Success => "success",
            CheckConclusion::Failure => "failure",
            CheckConclusion::Cancelled => "cancelled",
        }
    }
}

/// Output attached to a finished check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutput {
    pub title: String,
    pub summary: String,
    pub text: String,
}

/// CheckRunHandle port for one check run on the current commit
///
/// The handle is created unstarted; `start` registers it with the platform,
/// `finish` or `cancel` completes it.
#[async_trait]
pub trait CheckRunHandle: Send {
    /// Registers the check run with the given status
    ///
    /// # Errors
    /// Fails when the platform refuses the check run, typically because the
    /// token lacks the `checks: write` permission (forked pull requests).
    async fn start(&mut self, status: CheckStatus) -> Result<()>;

    /// Completes the check run with a conclusion and output
    async fn finish(&mut self, conclusion: CheckConclusion, output: CheckOutput) -> Result<()>;

    /// Completes the check run as cancelled
    async fn cancel(&mut self) -> Result<()>;
}

/// CheckRunFactory port creating check run handles by name
pub trait CheckRunFactory: Send + Sync {
    type Handle: CheckRunHandle;

    /// Creates an unstarted check run handle; no platform call is made yet
    fn create_check(&self, name: &str) -> Self::Handle;
}
