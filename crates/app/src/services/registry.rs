//! Device registry: ordered collection of device handles with bulk operations.

use std::sync::Arc;

use homectl_domain::device::Device;
use homectl_domain::error::{HomeError, NotFoundError};
use homectl_domain::id::DeviceId;
use homectl_domain::status::DeviceStatus;

use crate::ports::SharedSink;
use crate::services::device_handle::DeviceHandle;

/// Ordered set of devices owned for the lifetime of the run.
///
/// Iteration follows insertion order. Ids are not checked for uniqueness;
/// lookups return the first match.
pub struct DeviceRegistry {
    devices: Vec<DeviceHandle>,
    sink: SharedSink,
}

impl DeviceRegistry {
    /// Create an empty registry whose devices report through `sink`.
    #[must_use]
    pub fn new(sink: SharedSink) -> Self {
        Self {
            devices: Vec::new(),
            sink,
        }
    }

    /// Wrap `device` in a handle, append it, and return the handle.
    pub fn register(&mut self, device: Device) -> DeviceHandle {
        let handle = DeviceHandle::new(device, Arc::clone(&self.sink));
        self.add(handle.clone());
        handle
    }

    /// Append an existing handle.
    pub fn add(&mut self, handle: DeviceHandle) {
        if self.devices.iter().any(|known| known.id() == handle.id()) {
            tracing::warn!(device_id = %handle.id(), "registering duplicate device id");
        }
        tracing::debug!(device_id = %handle.id(), position = self.devices.len(), "device registered");
        self.devices.push(handle);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeviceHandle> {
        self.devices.iter()
    }

    /// Find the first device registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::NotFound`] when no device has that id.
    pub fn get(&self, id: &DeviceId) -> Result<&DeviceHandle, HomeError> {
        self.devices
            .iter()
            .find(|handle| handle.id() == id)
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Device",
                    id: id.to_string(),
                }
                .into()
            })
    }

    /// Apply `action` to every device matching `predicate`, in order.
    ///
    /// The predicate sees the device under its lock; the action runs after
    /// the lock is released so it may call back into the handle.
    /// Returns how many devices matched.
    pub fn for_each<P, A>(&self, predicate: P, mut action: A) -> usize
    where
        P: Fn(&Device) -> bool,
        A: FnMut(&DeviceHandle),
    {
        let mut matched = 0;
        for handle in &self.devices {
            if handle.read(&predicate) {
                action(handle);
                matched += 1;
            }
        }
        matched
    }

    /// Power down everything except climate-control devices.
    ///
    /// Protection follows the construction-time climate-control tag, never
    /// the display name. Returns how many devices were turned off.
    pub fn energy_saving_sweep(&self) -> usize {
        self.sink.emit("Enabling energy-saving mode...");
        let powered_down = self.for_each(
            |device| !device.is_climate_control(),
            |handle| {
                handle.turn_off();
            },
        );
        tracing::info!(powered_down, kept = self.len() - powered_down, "energy-saving sweep complete");
        powered_down
    }

    /// Snapshot every device, in registration order.
    #[must_use]
    pub fn statuses(&self) -> Vec<DeviceStatus> {
        self.devices.iter().map(DeviceHandle::status).collect()
    }
}
