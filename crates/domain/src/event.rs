//! Device events: the human-readable record of each state change.
//!
//! Every mutating device operation returns one or more events. Their
//! [`Display`](std::fmt::Display) output is the console line shown to the
//! operator.

use std::fmt;

use serde::Serialize;

use crate::device::DeviceKind;
use crate::id::DeviceId;

/// Something that just happened to a device.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeviceEvent {
    TurnedOn {
        device_id: DeviceId,
        name: String,
        location: String,
        /// Kind payload at power-on, used to report brightness / temperature.
        kind: DeviceKind,
    },
    TurnedOff {
        device_id: DeviceId,
        name: String,
        location: String,
    },
    BrightnessSet {
        device_id: DeviceId,
        name: String,
        location: String,
        brightness: u8,
    },
    TemperatureSet {
        device_id: DeviceId,
        name: String,
        location: String,
        temperature: f64,
    },
    /// An outdoor reading was received and is about to override the set point.
    WeatherReading { device_id: DeviceId, external: f64 },
    Playing {
        device_id: DeviceId,
        name: String,
        track: String,
    },
    Renamed { device_id: DeviceId, name: String },
}

impl DeviceEvent {
    /// The device this event refers to.
    #[must_use]
    pub fn device_id(&self) -> &DeviceId {
        match self {
            Self::TurnedOn { device_id, .. }
            | Self::TurnedOff { device_id, .. }
            | Self::BrightnessSet { device_id, .. }
            | Self::TemperatureSet { device_id, .. }
            | Self::WeatherReading { device_id, .. }
            | Self::Playing { device_id, .. }
            | Self::Renamed { device_id, .. } => device_id,
        }
    }
}

impl fmt::Display for DeviceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TurnedOn {
                name,
                location,
                kind,
                ..
            } => match kind {
                DeviceKind::Light { brightness } => write!(
                    f,
                    "{name} at {location} turned ON with brightness {brightness}%."
                ),
                DeviceKind::Thermostat { temperature } => write!(
                    f,
                    "{name} at {location} turned ON. Current temperature: {temperature}°F."
                ),
                DeviceKind::SmartSpeaker { .. } => write!(f, "{name} at {location} turned ON."),
            },
            Self::TurnedOff { name, location, .. } => {
                write!(f, "{name} at {location} turned OFF.")
            }
            Self::BrightnessSet {
                name,
                location,
                brightness,
                ..
            } => write!(
                f,
                "Brightness of {name} at {location} set to {brightness}%."
            ),
            Self::TemperatureSet {
                name,
                location,
                temperature,
                ..
            } => write!(f, "{name} at {location} set to {temperature}°F."),
            Self::WeatherReading { external, .. } => write!(
                f,
                "External temperature: {external}°F. Adjusting thermostat..."
            ),
            Self::Playing { name, track, .. } => write!(f, "{name} is now playing: {track}"),
            Self::Renamed { name, .. } => write!(f, "Device renamed to: {name}"),
        }
    }
}
