//! TCP adapter error types.

use std::io;
use std::time::Duration;

use homectl_domain::error::HomeError;

/// Errors specific to the TCP endpoint.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Binding or listening on the configured address failed.
    #[error("failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The configured host resolved to no address.
    #[error("no address found for {0}")]
    Resolve(String),

    /// An exchange was attempted before `start_server`.
    #[error("endpoint is not listening")]
    NotListening,

    /// Accepting a pending connection failed.
    #[error("failed to accept connection")]
    Accept(#[source] io::Error),

    /// The peer did not show up, or did not read/write, in time.
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    /// Reading from or writing to an accepted connection failed.
    #[error("connection i/o failed")]
    Io(#[source] io::Error),
}

impl From<NetworkError> for HomeError {
    fn from(err: NetworkError) -> Self {
        Self::Io(Box::new(err))
    }
}
