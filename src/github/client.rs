use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::FetchError;
use super::repo::GitHubRepo;
use super::types::{RateLimit, RateLimitResponse, Release};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetLatestRelease: Send + Sync {
    async fn latest_release(&self, repo: &GitHubRepo) -> Result<Release, FetchError>;
    async fn rate_limit(&self) -> Result<RateLimit, FetchError>;
}

pub struct GitHub {
    pub client: Client,
    pub api_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url))]
    pub fn new(client: Client, api_url: Option<String>) -> Self {
        let api_url = api_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { client, api_url }
    }
}

#[async_trait]
impl GetLatestRelease for GitHub {
    #[tracing::instrument(skip(self))]
    async fn latest_release(&self, repo: &GitHubRepo) -> Result<Release, FetchError> {
        GitHub::fetch_latest_release(repo, &self.client, &self.api_url).await
    }

    #[tracing::instrument(skip(self))]
    async fn rate_limit(&self) -> Result<RateLimit, FetchError> {
        GitHub::fetch_rate_limit(&self.client, &self.api_url).await
    }
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url))]
    pub async fn fetch_latest_release(
        repo: &GitHubRepo,
        client: &Client,
        api_url: &str,
    ) -> Result<Release, FetchError> {
        let url = format!(
            "{}/repos/{}/{}/releases/latest",
            api_url, repo.owner, repo.repo
        );

        debug!("Fetching latest release from {}...", url);

        let release: Release = get_json(client, &url).await?;

        debug!(
            "Latest release of {} is {} with {} assets",
            repo,
            release.tag_name,
            release.assets.len()
        );

        Ok(release)
    }

    #[tracing::instrument(skip(client, api_url))]
    pub async fn fetch_rate_limit(client: &Client, api_url: &str) -> Result<RateLimit, FetchError> {
        let url = format!("{}/rate_limit", api_url);

        debug!("Fetching rate limit from {}...", url);

        let response: RateLimitResponse = get_json(client, &url).await?;
        Ok(response.resources.core)
    }
}

/// Single GET attempt. Non-2xx responses keep their body for diagnostics.
async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        debug!("GET {} returned {}", url, status);
        return Err(FetchError::Status { status, body });
    }

    Ok(response.json::<T>().await?)
}
