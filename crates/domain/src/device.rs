//! Device: a controllable thing with an on/off state and a kind-specific payload.
//!
//! All variants share the uniform `{power, status}` contract; the
//! kind-specific operations (`set_brightness`, `set_temperature`,
//! `play_music`, …) reject devices of the wrong kind with
//! [`ValidationError::UnsupportedOperation`].

mod kind;

pub use kind::{DEFAULT_BRIGHTNESS, DEFAULT_TEMPERATURE, DeviceKind, MAX_BRIGHTNESS};

use serde::Serialize;

use crate::error::{HomeError, ValidationError};
use crate::event::DeviceEvent;
use crate::id::DeviceId;
use crate::status::DeviceStatus;
use crate::time::now;

/// A simulated home device.
///
/// Fields are private so that kind invariants (brightness range, speaker
/// silent while off) can only change through the methods below.
#[derive(Debug, Clone, Serialize)]
pub struct Device {
    id: DeviceId,
    name: String,
    location: String,
    powered: bool,
    /// Protected from the energy-saving sweep. Decided at construction.
    climate_control: bool,
    kind: DeviceKind,
}

impl Device {
    /// Start building a light with default brightness.
    #[must_use]
    pub fn light(id: impl Into<DeviceId>) -> DeviceBuilder {
        DeviceBuilder::new(id.into(), DeviceKind::light())
    }

    /// Start building a thermostat with the default set point.
    #[must_use]
    pub fn thermostat(id: impl Into<DeviceId>) -> DeviceBuilder {
        DeviceBuilder::new(id.into(), DeviceKind::thermostat())
    }

    /// Start building a smart speaker.
    #[must_use]
    pub fn smart_speaker(id: impl Into<DeviceId>) -> DeviceBuilder {
        DeviceBuilder::new(id.into(), DeviceKind::smart_speaker())
    }

    #[must_use]
    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    #[must_use]
    pub fn is_climate_control(&self) -> bool {
        self.climate_control
    }

    #[must_use]
    pub fn kind(&self) -> &DeviceKind {
        &self.kind
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the id or name is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }

    /// Power the device on. Idempotent: an already-on device re-asserts
    /// its state and reports again.
    pub fn turn_on(&mut self) -> DeviceEvent {
        self.powered = true;
        DeviceEvent::TurnedOn {
            device_id: self.id.clone(),
            name: self.name.clone(),
            location: self.location.clone(),
            kind: self.kind.clone(),
        }
    }

    /// Power the device off. Speakers stop playing.
    pub fn turn_off(&mut self) -> DeviceEvent {
        self.powered = false;
        if let DeviceKind::SmartSpeaker { playing, track } = &mut self.kind {
            *playing = false;
            *track = None;
        }
        DeviceEvent::TurnedOff {
            device_id: self.id.clone(),
            name: self.name.clone(),
            location: self.location.clone(),
        }
    }

    /// Take a read-only snapshot of the device.
    #[must_use]
    pub fn status(&self) -> DeviceStatus {
        DeviceStatus {
            id: self.id.clone(),
            name: self.name.clone(),
            location: self.location.clone(),
            powered: self.powered,
            kind: self.kind.clone(),
            observed_at: now(),
        }
    }

    /// Change the display name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is empty.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<DeviceEvent, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        self.name = name;
        Ok(DeviceEvent::Renamed {
            device_id: self.id.clone(),
            name: self.name.clone(),
        })
    }

    /// Set a light's brightness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BrightnessOutOfRange`] when `level` is
    /// outside `0..=100`, or [`ValidationError::UnsupportedOperation`] when
    /// the device is not a light. State is unchanged on error.
    pub fn set_brightness(&mut self, level: i32) -> Result<DeviceEvent, ValidationError> {
        let DeviceKind::Light { brightness } = &mut self.kind else {
            return Err(unsupported(&self.name, "set_brightness"));
        };
        let level = u8::try_from(level)
            .ok()
            .filter(|value| *value <= MAX_BRIGHTNESS)
            .ok_or(ValidationError::BrightnessOutOfRange { level })?;
        *brightness = level;
        Ok(DeviceEvent::BrightnessSet {
            device_id: self.id.clone(),
            name: self.name.clone(),
            location: self.location.clone(),
            brightness: level,
        })
    }

    /// Set a thermostat's set point. No bounds are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedOperation`] when the device is
    /// not a thermostat.
    pub fn set_temperature(&mut self, value: f64) -> Result<DeviceEvent, ValidationError> {
        let DeviceKind::Thermostat { temperature } = &mut self.kind else {
            return Err(unsupported(&self.name, "set_temperature"));
        };
        *temperature = value;
        Ok(DeviceEvent::TemperatureSet {
            device_id: self.id.clone(),
            name: self.name.clone(),
            location: self.location.clone(),
            temperature: value,
        })
    }

    /// Override the set point with an outdoor sensor reading.
    ///
    /// The reading replaces the set point as-is: no smoothing, no bounds.
    /// Returns the reading event followed by the resulting set-point event.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedOperation`] when the device is
    /// not a thermostat.
    pub fn integrate_weather(&mut self, external: f64) -> Result<Vec<DeviceEvent>, ValidationError> {
        if !matches!(self.kind, DeviceKind::Thermostat { .. }) {
            return Err(unsupported(&self.name, "integrate_weather"));
        }
        let reading = DeviceEvent::WeatherReading {
            device_id: self.id.clone(),
            external,
        };
        let adjusted = self.set_temperature(external)?;
        Ok(vec![reading, adjusted])
    }

    /// Start playing `track` on a speaker.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PoweredOff`] when the speaker is off, or
    /// [`ValidationError::UnsupportedOperation`] when the device is not a
    /// speaker.
    pub fn play_music(&mut self, track: impl Into<String>) -> Result<DeviceEvent, ValidationError> {
        let DeviceKind::SmartSpeaker { playing, track: current } = &mut self.kind else {
            return Err(unsupported(&self.name, "play_music"));
        };
        if !self.powered {
            return Err(ValidationError::PoweredOff {
                name: self.name.clone(),
            });
        }
        let track = track.into();
        *playing = true;
        *current = Some(track.clone());
        Ok(DeviceEvent::Playing {
            device_id: self.id.clone(),
            name: self.name.clone(),
            track,
        })
    }
}

fn unsupported(name: &str, operation: &'static str) -> ValidationError {
    ValidationError::UnsupportedOperation {
        name: name.to_string(),
        operation,
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug)]
pub struct DeviceBuilder {
    id: DeviceId,
    kind: DeviceKind,
    name: Option<String>,
    location: Option<String>,
    climate_control: Option<bool>,
}

impl DeviceBuilder {
    fn new(id: DeviceId, kind: DeviceKind) -> Self {
        Self {
            id,
            kind,
            name: None,
            location: None,
            climate_control: None,
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Override the climate-control tag. Defaults to `true` for thermostats
    /// and `false` for everything else.
    #[must_use]
    pub fn climate_control(mut self, climate_control: bool) -> Self {
        self.climate_control = Some(climate_control);
        self
    }

    /// Consume the builder, validate, and return a powered-off [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] if the id or name is missing or empty.
    pub fn build(self) -> Result<Device, HomeError> {
        let climate_control = self
            .climate_control
            .unwrap_or_else(|| self.kind.is_climate_control());
        let device = Device {
            id: self.id,
            name: self.name.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            powered: false,
            climate_control,
            kind: self.kind,
        };
        device.validate()?;
        Ok(device)
    }
}
