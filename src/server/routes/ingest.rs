//! Game-state ingest endpoint.

use axum::{extract::State, response::Html, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::protocol::CHAT_MESSAGE;
use crate::server::routes::pages;
use crate::server::state::AppState;

/// POST /gsi - Relay a pushed JSON document to every viewer.
///
/// Body parsing is left to the `Json` extractor, which rejects a
/// non-JSON body before this handler runs. The caller always gets the
/// confirmation page, whether or not anyone was listening.
pub async fn ingest(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Html<&'static str> {
    match state.hub.publish(CHAT_MESSAGE, &payload) {
        Ok(receivers) => tracing::info!(receivers, "Got a game-state post"),
        Err(e) => tracing::error!(?e, "Failed to relay game-state post"),
    }

    pages::confirmation()
}
