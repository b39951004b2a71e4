//! GSI Relay - rebroadcasts pushed game-state payloads to live viewers.
//!
//! An external sender POSTs JSON to `/gsi`; every viewer connected to the
//! `/ws` push channel receives it as a `"chat message"` event. Viewers can
//! also emit `"chat message"` themselves, which is echoed to everyone.

pub mod config;
pub mod error;
pub mod hub;
pub mod protocol;
pub mod server;

pub use config::RelayConfig;
pub use error::{RelayError, Result};
pub use hub::Hub;
