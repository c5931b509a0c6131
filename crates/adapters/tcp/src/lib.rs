//! # homectl-adapter-tcp
//!
//! Single-connection TCP endpoint implementing the `MessageEndpoint` port.
//!
//! ## Wire format
//!
//! Plaintext UTF-8 bytes with no framing and no length prefix. A message
//! ends when the connection closes. Each call accepts exactly one pending
//! connection, performs one exchange, and closes it.
//!
//! ## Bounded waits
//!
//! Accepting a peer and each read/write are wrapped in timeouts from
//! [`EndpointConfig`], so no call can block forever waiting for a peer.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `homectl-app` and `homectl-domain`.

mod config;
mod error;

pub use config::EndpointConfig;
pub use error::NetworkError;

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt as _, AsyncWriteExt as _};
use tokio::net::{TcpListener, TcpSocket, TcpStream, lookup_host};

use homectl_app::ports::MessageEndpoint;
use homectl_domain::error::HomeError;

/// Largest chunk read by a single [`MessageEndpoint::receive_data`] call.
pub const RECEIVE_BUFFER_SIZE: usize = 1024;

/// TCP implementation of [`MessageEndpoint`].
pub struct TcpEndpoint {
    config: EndpointConfig,
    listener: Option<TcpListener>,
}

impl TcpEndpoint {
    #[must_use]
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            config,
            listener: None,
        }
    }

    /// Whether [`start_server`](MessageEndpoint::start_server) succeeded.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    /// Bound address, once listening.
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener
            .as_ref()
            .and_then(|listener| listener.local_addr().ok())
    }

    async fn bind(&self) -> Result<TcpListener, NetworkError> {
        let addr = self.config.bind_addr();
        let bind_error = |source: io::Error| NetworkError::Bind {
            addr: addr.clone(),
            source,
        };

        let resolved = lookup_host(&addr)
            .await
            .map_err(bind_error)?
            .next()
            .ok_or_else(|| NetworkError::Resolve(addr.clone()))?;
        let socket = if resolved.is_ipv4() {
            TcpSocket::new_v4()
        } else {
            TcpSocket::new_v6()
        }
        .map_err(bind_error)?;
        socket.bind(resolved).map_err(bind_error)?;
        socket.listen(self.config.backlog).map_err(bind_error)
    }

    async fn accept(&self) -> Result<TcpStream, NetworkError> {
        let listener = self.listener.as_ref().ok_or(NetworkError::NotListening)?;
        let (stream, peer) = bounded("accept", self.config.accept_timeout(), listener.accept())
            .await?
            .map_err(NetworkError::Accept)?;
        tracing::debug!(%peer, "connection accepted");
        Ok(stream)
    }

    /// Accept one connection and write `message` fully, then close.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError`] when not listening, when no peer connects in
    /// time, or when the write fails or times out.
    pub async fn try_send(&self, message: &str) -> Result<usize, NetworkError> {
        let mut stream = self.accept().await?;
        let io_timeout = self.config.io_timeout();
        bounded("write", io_timeout, stream.write_all(message.as_bytes()))
            .await?
            .map_err(NetworkError::Io)?;
        bounded("shutdown", io_timeout, stream.shutdown())
            .await?
            .map_err(NetworkError::Io)?;
        Ok(message.len())
    }

    /// Accept one connection and read a single chunk of at most
    /// [`RECEIVE_BUFFER_SIZE`] bytes, then close.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError`] when not listening, when no peer connects in
    /// time, or when the read fails or times out.
    pub async fn try_receive(&self) -> Result<String, NetworkError> {
        let mut stream = self.accept().await?;
        let mut buffer = [0_u8; RECEIVE_BUFFER_SIZE];
        let read = bounded("read", self.config.io_timeout(), stream.read(&mut buffer))
            .await?
            .map_err(NetworkError::Io)?;
        Ok(String::from_utf8_lossy(&buffer[..read]).into_owned())
    }
}

async fn bounded<T>(
    operation: &'static str,
    after: Duration,
    future: impl Future<Output = T>,
) -> Result<T, NetworkError> {
    tokio::time::timeout(after, future)
        .await
        .map_err(|_| NetworkError::Timeout { operation, after })
}

impl MessageEndpoint for TcpEndpoint {
    async fn start_server(&mut self) -> Result<SocketAddr, HomeError> {
        let listener = self.bind().await.inspect_err(|err| {
            tracing::error!(addr = %self.config.bind_addr(), error = %err, "failed to start server");
        })?;
        let local = listener.local_addr().map_err(NetworkError::Io)?;
        tracing::info!(%local, backlog = self.config.backlog, "server listening");
        self.listener = Some(listener);
        Ok(local)
    }

    async fn send_data(&self, message: &str) -> Result<(), HomeError> {
        let sent = self.try_send(message).await.inspect_err(|err| {
            tracing::warn!(error = %err, "send failed");
        })?;
        tracing::info!(bytes = sent, "message sent");
        Ok(())
    }

    async fn receive_data(&self) -> String {
        match self.try_receive().await {
            Ok(text) => {
                tracing::info!(bytes = text.len(), "message received");
                text
            }
            Err(err) => {
                tracing::warn!(error = %err, "receive failed");
                String::new()
            }
        }
    }
}
