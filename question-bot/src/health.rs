//! Liveness endpoint for the hosting platform: `GET /` and `GET /health`, fixed 200 bodies.
//!
//! Runs as a background task next to the Telegram dispatcher; no shared state with it.

use std::net::SocketAddr;

use axum::{routing::get, Router};
use tokio::task::JoinHandle;
use tracing::{error, info};

pub const ROOT_BODY: &str = "Bot is running!";
pub const HEALTH_BODY: &str = "OK";

pub fn router() -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}

async fn root_handler() -> &'static str {
    ROOT_BODY
}

async fn health_handler() -> &'static str {
    HEALTH_BODY
}

/// Binds `addr` and serves the liveness routes in a spawned task.
///
/// Bind failure is returned to the caller (startup is aborted). Returns the bound address,
/// which differs from `addr` when port 0 is requested.
pub async fn start_health_server(addr: SocketAddr) -> anyhow::Result<(SocketAddr, JoinHandle<()>)> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind liveness endpoint on {}: {}", addr, e))?;
    let actual_addr = listener.local_addr()?;

    info!(addr = %actual_addr, "Liveness endpoint listening");

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router()).await {
            error!(error = %e, "Liveness endpoint error");
        }
    });

    Ok((actual_addr, handle))
}
