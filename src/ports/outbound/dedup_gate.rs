use crate::shared::Result;
use async_trait::async_trait;

/// DedupGate port deciding whether a dependency was already reported
///
/// Keeps the issue path from opening the same report on every scheduled
/// run. The reporting use case only sees this trait, so the lookup strategy
/// (title search, labels, a ledger) can change without touching it.
#[async_trait]
pub trait DedupGate: Send + Sync {
    /// Returns true if an existing issue or pull request covers `dependency_name`
    ///
    /// # Errors
    /// A failed lookup is returned as an error; callers must not treat it as
    /// "not reported".
    async fn already_reported(&self, dependency_name: &str) -> Result<bool>;
}
