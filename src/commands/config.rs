use anyhow::{Context, Result};
use log::debug;
use std::time::Duration;

use crate::{
    github::{GitHub, GitHubRepo},
    http::build_client,
};

/// Resolved settings plus the GitHub client built from them
pub struct Config {
    pub github: GitHub,
    pub repo: GitHubRepo,
}

impl Config {
    pub fn new(repo: &str, api_url: Option<String>, timeout: Duration) -> Result<Self> {
        let repo = repo
            .parse::<GitHubRepo>()
            .with_context(|| format!("Invalid repository '{}'", repo))?;

        let client = build_client(timeout)?;
        let github = GitHub::new(client, api_url);

        debug!(
            "Tracking {} via {} (timeout {:?})",
            repo, github.api_url, timeout
        );

        Ok(Self { github, repo })
    }
}
