//! The living-room device set.

use homectl_app::services::device_handle::DeviceHandle;
use homectl_app::services::registry::DeviceRegistry;
use homectl_domain::device::Device;
use homectl_domain::error::HomeError;

/// Location shared by every living-room device.
pub const LOCATION: &str = "Living Room";

/// Handles to the three living-room devices, in registration order.
#[derive(Debug, Clone)]
pub struct LivingRoom {
    pub light: DeviceHandle,
    pub thermostat: DeviceHandle,
    pub speaker: DeviceHandle,
}

impl LivingRoom {
    /// Build the light, thermostat and speaker and register them in that
    /// order.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a device fails to build.
    pub fn install(registry: &mut DeviceRegistry) -> Result<Self, HomeError> {
        let light = Device::light("L1")
            .name("Living Room Light")
            .location(LOCATION)
            .build()?;
        let thermostat = Device::thermostat("T1")
            .name("Living Room Thermostat")
            .location(LOCATION)
            .build()?;
        let speaker = Device::smart_speaker("S1")
            .name("Living Room Speaker")
            .location(LOCATION)
            .build()?;

        let installed = Self {
            light: registry.register(light),
            thermostat: registry.register(thermostat),
            speaker: registry.register(speaker),
        };
        tracing::info!(devices = registry.len(), location = LOCATION, "virtual devices installed");
        Ok(installed)
    }
}
