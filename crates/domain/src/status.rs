//! Status snapshots: a read-only view of a device at one instant.
//!
//! Monitors and sinks render devices through [`DeviceStatus`] so they never
//! need to know the concrete variant.

use std::fmt;

use serde::Serialize;

use crate::device::DeviceKind;
use crate::id::DeviceId;
use crate::time::Timestamp;

/// Snapshot of a device's power state and kind payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceStatus {
    pub id: DeviceId,
    pub name: String,
    pub location: String,
    pub powered: bool,
    pub kind: DeviceKind,
    pub observed_at: Timestamp,
}

fn on_off(powered: bool) -> &'static str {
    if powered { "ON" } else { "OFF" }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let power = on_off(self.powered);
        let Self { name, location, .. } = self;
        match &self.kind {
            DeviceKind::Light { brightness } => write!(
                f,
                "{name} at {location} is {power} with brightness {brightness}%."
            ),
            DeviceKind::Thermostat { temperature } => write!(
                f,
                "{name} at {location} is {power}. Temperature: {temperature}°F."
            ),
            DeviceKind::SmartSpeaker { playing, .. } => {
                let music = if *playing { "playing" } else { "not playing" };
                write!(f, "{name} at {location} is {power}. Music is {music}.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;

    fn status(powered: bool, kind: DeviceKind) -> DeviceStatus {
        DeviceStatus {
            id: DeviceId::new("X1"),
            name: "Den Device".to_string(),
            location: "Den".to_string(),
            powered,
            kind,
            observed_at: now(),
        }
    }

    #[test]
    fn should_render_light_status() {
        let s = status(true, DeviceKind::Light { brightness: 80 });
        assert_eq!(s.to_string(), "Den Device at Den is ON with brightness 80%.");
    }

    #[test]
    fn should_render_thermostat_status() {
        let s = status(false, DeviceKind::Thermostat { temperature: 68.5 });
        assert_eq!(s.to_string(), "Den Device at Den is OFF. Temperature: 68.5°F.");
    }

    #[test]
    fn should_render_speaker_status() {
        let s = status(
            true,
            DeviceKind::SmartSpeaker {
                playing: true,
                track: Some("x".to_string()),
            },
        );
        assert_eq!(s.to_string(), "Den Device at Den is ON. Music is playing.");

        let s = status(false, DeviceKind::smart_speaker());
        assert_eq!(s.to_string(), "Den Device at Den is OFF. Music is not playing.");
    }

    #[test]
    fn should_serialize_snapshot_with_kind_tag() {
        let s = status(true, DeviceKind::light());
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["id"], "X1");
        assert_eq!(json["powered"], true);
        assert_eq!(json["kind"]["type"], "light");
    }
}
