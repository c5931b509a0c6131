//! Activity log port: append-only audit records.

use std::sync::Arc;

/// Append-only record of notable activity (start-up, logins, shutdown).
///
/// Implementations must never fail the caller: a sink that cannot write
/// degrades to a no-op.
pub trait ActivityLog: Send + Sync {
    /// Append one record.
    fn record(&self, message: &str);
}

impl<T: ActivityLog + ?Sized> ActivityLog for Arc<T> {
    fn record(&self, message: &str) {
        (**self).record(message);
    }
}
