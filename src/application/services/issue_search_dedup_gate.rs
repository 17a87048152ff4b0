use crate::license_compliance::domain::RepositoryRef;
use crate::ports::outbound::{DedupGate, IssueTracker};
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;

/// Only the total count matters, so a single result is requested
const SEARCH_PAGE_SIZE: u32 = 1;

/// IssueSearchDedupGate - DedupGate backed by an issue/PR title search
///
/// A dependency counts as reported when any issue or pull request in the
/// repository has its name in the title. This is a heuristic: a report with
/// different wording is missed, and an unrelated issue mentioning the name
/// suppresses a report.
pub struct IssueSearchDedupGate<T: IssueTracker> {
    tracker: T,
    repository: RepositoryRef,
}

impl<T: IssueTracker> IssueSearchDedupGate<T> {
    pub fn new(tracker: T, repository: RepositoryRef) -> Self {
        Self {
            tracker,
            repository,
        }
    }

    /// Builds the search query for a dependency, scoped to the repository
    pub fn search_query(&self, dependency_name: &str) -> String {
        format!("{} in:title repo:{}", dependency_name, self.repository)
    }
}

#[async_trait]
impl<T: IssueTracker> DedupGate for IssueSearchDedupGate<T> {
    async fn already_reported(&self, dependency_name: &str) -> Result<bool> {
        let query = self.search_query(dependency_name);
        let result = self
            .tracker
            .search_issues(&query, SEARCH_PAGE_SIZE)
            .await
            .with_context(|| format!("Failed to search existing issues for {}", dependency_name))?;

        Ok(result.total_count > 0)
    }
}
