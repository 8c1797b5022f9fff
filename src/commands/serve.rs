use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::server::{self, AppState};

use super::config::Config;

#[tracing::instrument(skip(config))]
pub async fn serve(config: Config, listen: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(listen)
        .await
        .with_context(|| format!("Failed to bind {}", listen))?;

    server::serve(listener, AppState::new(config.github, config.repo)).await
}
