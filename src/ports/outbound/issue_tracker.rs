use crate::shared::Result;
use async_trait::async_trait;

/// Result of an issue/pull request search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub total_count: u64,
}

/// Issue to be opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub owner: String,
    pub repo: String,
    pub title: String,
    pub body: String,
}

/// Issue created on the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    pub url: String,
}

/// IssueTracker port for searching and opening issues
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Searches issues and pull requests with a platform search query
    ///
    /// # Arguments
    /// * `query` - Search query, e.g. `openssl in:title repo:octo/demo`
    /// * `page_size` - Number of items requested; only `total_count` is used
    async fn search_issues(&self, query: &str, page_size: u32) -> Result<SearchResult>;

    /// Opens a new issue
    async fn create_issue(&self, issue: NewIssue) -> Result<CreatedIssue>;
}
