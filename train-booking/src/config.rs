//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tracing::warn;

/// Environment variable holding the bind address.
pub const HOST_VAR: &str = "TRAIN_BOOKING_HOST";

/// Environment variable holding the listen port.
pub const PORT_VAR: &str = "TRAIN_BOOKING_PORT";

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: IpAddr,

    /// Port to listen on.
    pub port: u16,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self { host, port }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup(HOST_VAR)
            .and_then(|raw| match raw.parse::<IpAddr>() {
                Ok(host) => Some(host),
                Err(e) => {
                    warn!(value = %raw, error = %e, "ignoring invalid {HOST_VAR}");
                    None
                }
            })
            .unwrap_or(defaults.host);

        let port = lookup(PORT_VAR)
            .and_then(|raw| match raw.parse::<u16>() {
                Ok(port) => Some(port),
                Err(e) => {
                    warn!(value = %raw, error = %e, "ignoring invalid {PORT_VAR}");
                    None
                }
            })
            .unwrap_or(defaults.port);

        Self { host, port }
    }

    /// Returns the socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
        }
    }
}
