//! GitHub Releases API access.

mod client;
mod error;
mod repo;
mod types;

#[cfg(test)]
pub use client::MockGetLatestRelease;
pub use client::{DEFAULT_API_URL, GetLatestRelease, GitHub};
pub use error::FetchError;
pub use repo::{DEFAULT_REPO, GitHubRepo};
pub use types::{RateLimit, Release, ReleaseAsset};
