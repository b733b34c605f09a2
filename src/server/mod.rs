//! HTTP server.
//!
//! Endpoints:
//! - `GET /api/generate` - profile from query parameters
//! - `POST /api/generate` - profile from a JSON body
//! - `/health` - liveness probe
//! - `/status` - JSON resolution statistics
//! - `/metrics` - Prometheus-compatible metrics

mod handlers;
mod types;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use handlers::{
    generate_get_handler, generate_post_handler, health_handler, metrics_handler, status_handler,
};
pub use types::{AppState, ErrorBody};

/// Builds the router over shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/generate",
            get(generate_get_handler).post(generate_post_handler),
        )
        .route("/health", get(health_handler))
        .route("/status", get(status_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Initializes the shared resources, binds `config.listen` and serves until
/// `shutdown` is cancelled.
pub async fn start_server(
    config: &Config,
    shutdown: CancellationToken,
) -> Result<(), anyhow::Error> {
    let state = AppState::from_config(config)?;

    let listener = TcpListener::bind(config.listen)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}: {}", config.listen, e))?;

    run_server(listener, state, shutdown).await
}

/// Serves on an already bound listener until `shutdown` is cancelled.
pub async fn run_server(
    listener: TcpListener,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), anyhow::Error> {
    let addr = listener.local_addr()?;
    log::info!("Server listening on http://{}/", addr);
    log::info!("  - Generate: http://{}/api/generate?country=US", addr);
    log::info!("  - Status: http://{}/status", addr);
    log::info!("  - Metrics: http://{}/metrics", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    log::info!("Server stopped");
    Ok(())
}
