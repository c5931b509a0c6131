//! TCP endpoint configuration.

use std::net::Ipv6Addr;
use std::time::Duration;

use serde::Deserialize;

/// Configuration for the single-connection TCP endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port. `0` asks the OS for a free port.
    pub port: u16,
    /// Maximum number of pending connections.
    pub backlog: u32,
    /// How long to wait for a peer to connect, in milliseconds.
    pub accept_timeout_ms: u64,
    /// How long a single read or write may take, in milliseconds.
    pub io_timeout_ms: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            backlog: 5,
            accept_timeout_ms: 30_000,
            io_timeout_ms: 5_000,
        }
    }
}

impl EndpointConfig {
    /// Return the `host:port` bind address. IPv6 literals are bracketed.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        if self.host.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    #[must_use]
    pub fn accept_timeout(&self) -> Duration {
        Duration::from_millis(self.accept_timeout_ms)
    }

    #[must_use]
    pub fn io_timeout(&self) -> Duration {
        Duration::from_millis(self.io_timeout_ms)
    }
}
