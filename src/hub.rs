//! Broadcast hub shared by the ingest endpoint and the push channel.
//!
//! The hub owns the sending half of a `tokio::sync::broadcast` channel.
//! Each open viewer connection holds one [`Subscription`]; the set of live
//! receivers *is* the connection set, so a connection leaves the broadcast
//! set the moment its subscription is dropped.

use crate::error::Result;
use crate::protocol;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};
use uuid::Uuid;

/// One live push-channel session.
#[derive(Debug, Clone)]
pub struct Connection {
    /// Opaque session identifier.
    pub id: Uuid,

    /// When the viewer joined the broadcast set.
    pub connected_at: DateTime<Utc>,
}

impl Connection {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            connected_at: Utc::now(),
        }
    }

    /// Returns how long this connection has been open, in seconds.
    pub fn duration_secs(&self) -> i64 {
        (Utc::now() - self.connected_at).num_seconds().max(0)
    }
}

/// Fan-out point for encoded frames.
///
/// Buffering per viewer is bounded by the channel capacity. A viewer that
/// falls further behind loses its oldest frames and keeps receiving newer
/// ones, so delivery to a stalled viewer is not guaranteed.
#[derive(Debug, Clone)]
pub struct Hub {
    tx: broadcast::Sender<Arc<str>>,
}

impl Hub {
    /// Creates a hub whose viewers may fall `capacity` frames behind.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Delivers `payload` under `event` to every open connection.
    ///
    /// Returns how many connections the frame was handed to. Publishing
    /// with no connections is not an error.
    pub fn publish(&self, event: &str, payload: &Value) -> Result<usize> {
        let frame: Arc<str> = protocol::encode(event, payload)?.into();
        let receivers = self.tx.send(frame).unwrap_or(0);
        tracing::debug!(event, receivers, "Published frame");
        Ok(receivers)
    }

    /// Adds a new connection to the broadcast set.
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            connection: Connection::new(),
            rx: self.tx.subscribe(),
        }
    }

    /// Number of currently open connections.
    pub fn connection_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// A connection's membership in the broadcast set.
#[derive(Debug)]
pub struct Subscription {
    connection: Connection,
    rx: broadcast::Receiver<Arc<str>>,
}

impl Subscription {
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Waits for the next frame.
    ///
    /// Frames dropped because this viewer fell too far behind are skipped
    /// and logged. Returns `None` once the hub is gone.
    pub async fn recv(&mut self) -> Option<Arc<str>> {
        loop {
            match self.rx.recv().await {
                Ok(frame) => return Some(frame),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        connection = %self.connection.id,
                        skipped,
                        "Viewer lagged, frames dropped"
                    );
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}
