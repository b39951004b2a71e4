//! WebSocket handler for the push channel.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use serde_json::json;
use std::sync::Arc;

use crate::protocol::{self, CHAT_MESSAGE, CONNECT};
use crate::server::state::AppState;

/// WebSocket upgrade handler.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handles an individual viewer connection.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    // Join the broadcast set before acknowledging, so the viewer never
    // misses a publish that happens after it sees the handshake.
    let mut subscription = state.subscribe();
    let connection = subscription.connection().clone();
    tracing::info!(
        connection = %connection.id,
        connections = state.hub.connection_count(),
        "Viewer connected"
    );

    match protocol::encode(CONNECT, &json!({ "id": connection.id })) {
        Ok(handshake) => {
            if sender.send(Message::Text(handshake)).await.is_err() {
                tracing::debug!(connection = %connection.id, "Viewer left before handshake");
                return;
            }
        }
        Err(e) => tracing::error!(?e, "Failed to encode handshake"),
    }

    // Hub -> viewer
    let mut send_task = tokio::spawn(async move {
        while let Some(frame) = subscription.recv().await {
            if sender.send(Message::Text(frame.to_string())).await.is_err() {
                break;
            }
        }
    });

    // Viewer -> hub
    let hub = state.hub.clone();
    let id = connection.id;
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => match protocol::decode(&text) {
                    Some(envelope) if envelope.event == CHAT_MESSAGE => {
                        if let Err(e) = hub.publish(CHAT_MESSAGE, &envelope.data) {
                            tracing::error!(?e, connection = %id, "Failed to relay message");
                        }
                    }
                    Some(envelope) => {
                        tracing::debug!(connection = %id, event = %envelope.event, "Ignoring event");
                    }
                    None => {
                        tracing::warn!(connection = %id, "Ignoring malformed frame");
                    }
                },
                Message::Close(_) => break,
                // Pong is handled automatically by axum
                _ => {}
            }
        }
    });

    // Whichever side finishes first tears down the other, which drops the
    // subscription and removes the viewer from the broadcast set.
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    tracing::info!(
        connection = %connection.id,
        duration_secs = connection.duration_secs(),
        "Viewer disconnected"
    );
}
