//! Maintenance alerts: rendered on demand, never retained.

use std::fmt;

use serde::Serialize;

use crate::id::DeviceId;

/// A one-off maintenance notice about a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceAlert {
    device_id: DeviceId,
    message: String,
}

impl MaintenanceAlert {
    #[must_use]
    pub fn new(device_id: impl Into<DeviceId>, message: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for MaintenanceAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Maintenance Alert for Device ID {}: {}",
            self.device_id, self.message
        )
    }
}
