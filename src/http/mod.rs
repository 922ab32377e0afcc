pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::http::Method;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tracing::info;

use crate::adapters::store::memory::MemoryMemberStore;
use crate::config::ServerConfig;
use crate::http::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(store: Arc<MemoryMemberStore>) -> Router {
    let state = AppState::new(store);

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(AllowHeaders::mirror_request());

    routes::build_routes(state).layer(cors)
}

/// Start the HTTP server and block until shutdown.
pub async fn start_server(
    store: Arc<MemoryMemberStore>,
    config: ServerConfig,
) -> std::io::Result<()> {
    let router = build_router(store);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "loyalty service listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(err) => tracing::error!(error = %err, "failed to install CTRL+C handler"),
    }
}
