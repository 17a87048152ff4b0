use crate::shared::error::AuditError;
use crate::shared::Result;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Error payload returned by the GitHub REST API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Thin authenticated client for the GitHub REST API
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

impl GitHubClient {
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";
    const TIMEOUT_SECONDS: u64 = 30;
    const ACCEPT: &'static str = "application/vnd.github+json";
    const API_VERSION: &'static str = "2022-11-28";

    /// Creates a client for the given API root (e.g. `https://api.github.com`)
    pub fn new(api_url: &str, token: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("license-audit/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// GET `path` (which may carry a query string) and decode the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(Method::GET, path);
        self.send(request, path).await
    }

    /// POST a JSON body to `path` and decode the JSON response
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path).json(body);
        self.send(request, path).await
    }

    /// PATCH a JSON body to `path` and decode the JSON response
    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let request = self.request(Method::PATCH, path).json(body);
        self.send(request, path).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.api_url, path))
            .bearer_auth(&self.token)
            .header("Accept", Self::ACCEPT)
            .header("X-GitHub-Api-Version", Self::API_VERSION)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, path: &str) -> Result<T> {
        let endpoint = path.split('?').next().unwrap_or(path).to_string();
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|error| error.message)
                .unwrap_or(body);
            return Err(AuditError::GitHubApi {
                endpoint,
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let decoded = response.json::<T>().await?;
        Ok(decoded)
    }
}
