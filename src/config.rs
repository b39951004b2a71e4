//! Relay configuration.
//!
//! The only recognized environment variable is `PORT`.

use crate::error::{RelayError, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default listening port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Number of frames a slow viewer may fall behind before it starts losing them.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

/// Runtime configuration for the relay server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Address to listen on (all interfaces).
    pub host: IpAddr,

    /// TCP port to listen on.
    pub port: u16,

    /// Capacity of the broadcast channel shared by all viewers.
    pub channel_capacity: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl RelayConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// An unset or blank `PORT` falls back to [`DEFAULT_PORT`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("PORT") {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                config.port = trimmed
                    .parse()
                    .map_err(|source| RelayError::InvalidPort {
                        value: raw.clone(),
                        source,
                    })?;
            }
        }

        Ok(config)
    }

    /// Socket address the server binds to.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_when_unset() {
        let config = RelayConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_port_from_env() {
        let config = RelayConfig::from_lookup(|key| match key {
            "PORT" => Some("8080".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_blank_port_uses_default() {
        let config = RelayConfig::from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = RelayConfig::from_lookup(|_| Some("70000".to_string())).unwrap_err();
        assert!(matches!(err, RelayError::InvalidPort { ref value, .. } if value == "70000"));

        let err = RelayConfig::from_lookup(|_| Some("http".to_string())).unwrap_err();
        assert!(matches!(err, RelayError::InvalidPort { .. }));
    }
}
