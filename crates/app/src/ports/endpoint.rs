//! Network endpoint port: one inbound connection, one message, per call.

use std::future::Future;
use std::net::SocketAddr;

use homectl_domain::error::HomeError;

/// A connection-oriented responder bound to a fixed address.
///
/// Every exchange accepts exactly one pending connection and closes it
/// afterwards. There is no framing: a message ends when the connection
/// closes. Implementations bound each wait with a timeout.
pub trait MessageEndpoint {
    /// Bind and start listening. Returns the bound local address.
    fn start_server(&mut self) -> impl Future<Output = Result<SocketAddr, HomeError>> + Send;

    /// Accept one connection, write `message` fully, close the connection.
    fn send_data(&self, message: &str) -> impl Future<Output = Result<(), HomeError>> + Send;

    /// Accept one connection, read one bounded chunk, close the connection.
    ///
    /// Returns an empty string when nothing was received or the exchange
    /// failed.
    fn receive_data(&self) -> impl Future<Output = String> + Send;
}
