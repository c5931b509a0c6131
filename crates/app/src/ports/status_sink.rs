//! Status sink port: the operator-facing console channel.
//!
//! Every state change and every rejected operation produces exactly one
//! human-readable line through this port.

use std::sync::Arc;

/// Receives human-readable lines for the operator.
pub trait StatusSink: Send + Sync {
    /// Report a state change or informational line.
    fn emit(&self, line: &str);

    /// Report a failed or rejected operation.
    fn emit_error(&self, line: &str);
}

/// Sink shared between the main flow, scheduled actions and the monitor.
pub type SharedSink = Arc<dyn StatusSink>;

impl<T: StatusSink + ?Sized> StatusSink for Arc<T> {
    fn emit(&self, line: &str) {
        (**self).emit(line);
    }

    fn emit_error(&self, line: &str) {
        (**self).emit_error(line);
    }
}
