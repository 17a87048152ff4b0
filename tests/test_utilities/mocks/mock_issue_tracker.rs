use async_trait::async_trait;
use license_audit::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock IssueTracker for testing that records created issues
#[derive(Default, Clone)]
pub struct MockIssueTracker {
    fail_create: bool,
    pub created: Arc<Mutex<Vec<NewIssue>>>,
    pub searches: Arc<Mutex<Vec<String>>>,
}

impl MockIssueTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_create_failure() -> Self {
        Self {
            fail_create: true,
            ..Self::default()
        }
    }

    pub fn get_created(&self) -> Vec<NewIssue> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueTracker for MockIssueTracker {
    async fn search_issues(&self, query: &str, _page_size: u32) -> Result<SearchResult> {
        self.searches.lock().unwrap().push(query.to_string());
        Ok(SearchResult { total_count: 0 })
    }

    async fn create_issue(&self, issue: NewIssue) -> Result<CreatedIssue> {
        if self.fail_create {
            anyhow::bail!("Mock issue creation failure");
        }
        let mut created = self.created.lock().unwrap();
        created.push(issue.clone());
        Ok(CreatedIssue {
            url: format!(
                "https://github.com/{}/{}/issues/{}",
                issue.owner,
                issue.repo,
                created.len()
            ),
        })
    }
}
