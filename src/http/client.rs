//! Shared reqwest client for GitHub API calls.

use anyhow::{Context, Result};
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Builds the client used for every GitHub request.
///
/// No authentication header is ever attached; the tracked repository is
/// public. The timeout covers the whole request including the body.
pub fn build_client(timeout: Duration) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
    headers.insert(
        "x-github-api-version",
        HeaderValue::from_static(GITHUB_API_VERSION),
    );

    let client = Client::builder()
        .user_agent(concat!("desktop-downloads/", env!("DOWNLOADS_VERSION")))
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")?;

    Ok(client)
}
