//! Error types for the relay.

use std::net::SocketAddr;
use thiserror::Error;

/// Errors raised while configuring or running the relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// `PORT` was set but is not a valid TCP port.
    #[error("invalid PORT value {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// The listening socket could not be bound.
    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("server error")]
    Serve(#[source] std::io::Error),

    /// A push-channel frame could not be encoded.
    #[error("failed to encode frame")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RelayError>;
