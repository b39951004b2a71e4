//! HTTP server module for the ingest endpoint, viewer pages and push channel.

pub mod routes;
pub mod state;
pub mod ws;

use crate::config::RelayConfig;
use crate::error::{RelayError, Result};
use crate::hub::Hub;
use crate::server::routes::{health, ingest, pages};
use crate::server::state::AppState;
use crate::server::ws::ws_handler;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    // CORS layer for viewers served from elsewhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(pages::home))
        .route("/gsi", post(ingest::ingest))
        .route("/health", get(health::health_check))
        // WebSocket
        .route("/ws", get(ws_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Serves the relay on an already-bound listener until the process exits.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, router(state))
        .await
        .map_err(RelayError::Serve)
}

/// Binds the configured address and runs the relay.
pub async fn run(config: RelayConfig) -> Result<()> {
    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| RelayError::Bind { addr, source })?;

    tracing::info!("listening on *:{}", config.port);

    let state = AppState::new(Hub::new(config.channel_capacity));
    serve(listener, state).await
}
