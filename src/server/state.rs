//! Shared application state for the HTTP server.

use crate::hub::{Hub, Subscription};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Broadcast hub for push-channel viewers.
    pub hub: Hub,
}

impl AppState {
    /// Creates new app state around the given hub.
    pub fn new(hub: Hub) -> Self {
        Self { hub }
    }

    /// Joins a new viewer to the broadcast set.
    pub fn subscribe(&self) -> Subscription {
        self.hub.subscribe()
    }
}
