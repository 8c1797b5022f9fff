//! Upstream fetch failures.

use reqwest::StatusCode;
use thiserror::Error;

/// Any failure talking to the GitHub API. Nothing is retried; callers decide
/// how to report it.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("GitHub API error: {status}")]
    Status { status: StatusCode, body: String },

    #[error("GitHub API request timed out")]
    Timeout,

    #[error("GitHub API request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl FetchError {
    /// HTTP status returned by GitHub, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Request(e) => e.status(),
            FetchError::Timeout => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Request(error)
        }
    }
}
