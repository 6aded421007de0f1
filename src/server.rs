//! HTTP server initialization and runtime setup.

use crate::config::Config;
use crate::infrastructure::opener::NullOpener;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Links live only as long as the process. A redirect is the server's way of
/// "opening" a link, so the URL opener is a no-op here.
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or the
/// server stops with an error.
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::new(config.policy(), &config.base_url, Arc::new(NullOpener));

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
