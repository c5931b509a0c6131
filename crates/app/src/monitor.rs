//! Status monitor: a background task that periodically reports one device.
//!
//! The monitor runs on its own tokio task so it never blocks the main flow.
//! It only reads the device (a snapshot taken under the device lock) and
//! stops when its [`CancellationToken`] is cancelled.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::services::device_handle::DeviceHandle;

/// Default pause between two status reports.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Periodic status reporter for a single device.
#[derive(Debug, Clone, Copy)]
pub struct StatusMonitor {
    interval: Duration,
}

impl Default for StatusMonitor {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl StatusMonitor {
    /// Create a monitor reporting every `interval`.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Spawn the monitor loop.
    ///
    /// Each iteration waits one interval, then reports the device status.
    /// The task ends when `shutdown` is cancelled and yields the number of
    /// reports it emitted.
    pub fn start(self, device: DeviceHandle, shutdown: CancellationToken) -> JoinHandle<u64> {
        tracing::info!(
            device_id = %device.id(),
            interval_ms = u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX),
            "status monitor started"
        );
        tokio::spawn(self.run(device, shutdown))
    }

    async fn run(self, device: DeviceHandle, shutdown: CancellationToken) -> u64 {
        let mut reports = 0;
        loop {
            tokio::select! {
                () = shutdown.cancelled() => break,
                () = tokio::time::sleep(self.interval) => {
                    let status = device.display_status();
                    reports += 1;
                    tracing::debug!(device_id = %status.id, powered = status.powered, reports, "status reported");
                }
            }
        }
        tracing::info!(device_id = %device.id(), reports, "status monitor stopped");
        reports
    }
}
