use super::client::GitHubClient;
use crate::license_compliance::domain::RepositoryRef;
use crate::ports::outbound::{
    CheckConclusion, CheckOutput, CheckRunFactory, CheckRunHandle, CheckStatus,
};
use crate::shared::Result;
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct CreateCheckRunBody<'a> {
    name: &'a str,
    head_sha: &'a str,
    status: &'static str,
    started_at: String,
}

#[derive(Debug, Serialize)]
struct OutputBody<'a> {
    title: &'a str,
    summary: &'a str,
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct CompleteCheckRunBody<'a> {
    status: &'static str,
    conclusion: &'static str,
    completed_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<OutputBody<'a>>,
}

#[derive(Debug, Deserialize)]
struct CheckRunResponse {
    id: u64,
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// GitHubCheckRuns adapter creating check runs on the audited commit
pub struct GitHubCheckRuns {
    client: GitHubClient,
    repository: RepositoryRef,
}

impl GitHubCheckRuns {
    pub fn new(client: GitHubClient, repository: RepositoryRef) -> Self {
        Self { client, repository }
    }
}

impl CheckRunFactory for GitHubCheckRuns {
    type Handle = GitHubCheckRun;

    fn create_check(&self, name: &str) -> GitHubCheckRun {
        GitHubCheckRun {
            client: self.client.clone(),
            repository: self.repository.clone(),
            name: name.to_string(),
            id: None,
        }
    }
}

/// One check run; holds the platform id once started
pub struct GitHubCheckRun {
    client: GitHubClient,
    repository: RepositoryRef,
    name: String,
    id: Option<u64>,
}

impl GitHubCheckRun {
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    fn collection_path(&self) -> String {
        format!(
            "/repos/{}/{}/check-runs",
            self.repository.owner(),
            self.repository.name()
        )
    }

    fn started_id(&self) -> Result<u64> {
        self.id
            .ok_or_else(|| anyhow::anyhow!("Check run '{}' was never started", self.name))
    }

    async fn complete(
        &mut self,
        conclusion: CheckConclusion,
        output: Option<&CheckOutput>,
    ) -> Result<()> {
        let id = self.started_id()?;
        let body = CompleteCheckRunBody {
            status: "completed",
            conclusion: conclusion.as_str(),
            completed_at: now_rfc3339(),
            output: output.map(|o| OutputBody {
                title: &o.title,
                summary: &o.summary,
                text: &o.text,
            }),
        };

        let path = format!("{}/{}", self.collection_path(), id);
        let _: CheckRunResponse = self.client.patch_json(&path, &body).await?;
        Ok(())
    }
}

#[async_trait]
impl CheckRunHandle for GitHubCheckRun {
    async fn start(&mut self, status: CheckStatus) -> Result<()> {
        let body = CreateCheckRunBody {
            name: &self.name,
            head_sha: self.repository.head_sha(),
            status: status.as_str(),
            started_at: now_rfc3339(),
        };

        let created: CheckRunResponse = self
            .client
            .post_json(&self.collection_path(), &body)
            .await?;
        self.id = Some(created.id);
        Ok(())
    }

    async fn finish(&mut self, conclusion: CheckConclusion, output: CheckOutput) -> Result<()> {
        self.complete(conclusion, Some(&output)).await
    }

    async fn cancel(&mut self) -> Result<()> {
        self.complete(CheckConclusion::Cancelled, None).await
    }
}
