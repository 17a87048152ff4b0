use super::client::GitHubClient;
use crate::ports::outbound::{CreatedIssue, IssueTracker, NewIssue, SearchResult};
use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    total_count: u64,
}

#[derive(Debug, Serialize)]
struct CreateIssueBody<'a> {
    title: &'a str,
    body: &'a str,
}

#[derive(Debug, Deserialize)]
struct IssueResponse {
    html_url: String,
}

/// GitHubIssues adapter implementing the IssueTracker port
pub struct GitHubIssues {
    client: GitHubClient,
}

impl GitHubIssues {
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }

    fn search_path(query: &str, page_size: u32) -> String {
        format!(
            "/search/issues?q={}&per_page={}",
            urlencoding::encode(query),
            page_size
        )
    }
}

#[async_trait]
impl IssueTracker for GitHubIssues {
    async fn search_issues(&self, query: &str, page_size: u32) -> Result<SearchResult> {
        let response: SearchResponse = self
            .client
            .get_json(&Self::search_path(query, page_size))
            .await?;

        Ok(SearchResult {
            total_count: response.total_count,
        })
    }

    async fn create_issue(&self, issue: NewIssue) -> Result<CreatedIssue> {
        let path = format!("/repos/{}/{}/issues", issue.owner, issue.repo);
        let body = CreateIssueBody {
            title: &issue.title,
            body: &issue.body,
        };

        let created: IssueResponse = self.client.post_json(&path, &body).await?;
        Ok(CreatedIssue {
            url: created.html_url,
        })
    }
}
