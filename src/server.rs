//! HTTP endpoint serving the download page payload.

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use log::{error, info};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::downloads::DownloadsResponse;
use crate::github::{GetLatestRelease, GitHubRepo};

pub const DOWNLOADS_PATH: &str = "/api/download-desktop-app";

/// One hour at shared caches, then a day of serving stale while revalidating.
const CACHE_CONTROL: &str = "public, s-maxage=3600, stale-while-revalidate=86400";

const FETCH_FAILED: &str = "Failed to fetch releases";

/// Read-only state shared by every request
#[derive(Clone)]
pub struct AppState {
    pub github: Arc<dyn GetLatestRelease>,
    pub repo: Arc<GitHubRepo>,
}

impl AppState {
    pub fn new(github: impl GetLatestRelease + 'static, repo: GitHubRepo) -> Self {
        Self {
            github: Arc::new(github),
            repo: Arc::new(repo),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(DOWNLOADS_PATH, get(download_desktop_app))
        .with_state(state)
}

/// Serves until ctrl-c.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!("Serving {} on http://{}{}", state.repo, addr, DOWNLOADS_PATH);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[tracing::instrument(skip_all)]
async fn download_desktop_app(State(state): State<AppState>) -> Response {
    match state.github.latest_release(&state.repo).await {
        Ok(release) => {
            let body = DownloadsResponse::from_release(&release);
            info!(
                "Serving {} downloads for {} {}",
                body.downloads.len(),
                state.repo,
                body.version
            );
            ([(header::CACHE_CONTROL, CACHE_CONTROL)], Json(body)).into_response()
        }
        Err(e) => {
            error!("Error fetching releases for {}: {}", state.repo, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": FETCH_FAILED })),
            )
                .into_response()
        }
    }
}
