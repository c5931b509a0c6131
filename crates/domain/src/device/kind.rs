//! Kind-specific device payload.

use serde::{Deserialize, Serialize};

/// Default brightness of a freshly created light, in percent.
pub const DEFAULT_BRIGHTNESS: u8 = 50;

/// Highest accepted brightness, in percent.
pub const MAX_BRIGHTNESS: u8 = 100;

/// Default set point of a freshly created thermostat, in °F.
pub const DEFAULT_TEMPERATURE: f64 = 72.0;

/// The variant set of controllable devices and their kind-specific state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeviceKind {
    /// Dimmable light. `brightness` is always within `0..=100`.
    Light { brightness: u8 },
    /// Climate control with a set point in °F.
    Thermostat { temperature: f64 },
    /// Speaker that can only play while powered.
    SmartSpeaker {
        playing: bool,
        /// Last requested track; cleared on power-off.
        track: Option<String>,
    },
}

impl DeviceKind {
    #[must_use]
    pub fn light() -> Self {
        Self::Light {
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    #[must_use]
    pub fn thermostat() -> Self {
        Self::Thermostat {
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    #[must_use]
    pub fn smart_speaker() -> Self {
        Self::SmartSpeaker {
            playing: false,
            track: None,
        }
    }

    /// Short machine name of the variant.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light { .. } => "light",
            Self::Thermostat { .. } => "thermostat",
            Self::SmartSpeaker { .. } => "smart_speaker",
        }
    }

    /// Whether this kind keeps the climate running by default.
    #[must_use]
    pub fn is_climate_control(&self) -> bool {
        matches!(self, Self::Thermostat { .. })
    }
}
