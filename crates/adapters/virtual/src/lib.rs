//! # homectl-adapter-virtual
//!
//! Simulated devices and sensors for running the controller without
//! hardware.
//!
//! ## Provided devices
//!
//! | Device | Id | Name | Climate control |
//! |--------|----|------|-----------------|
//! | Light | `L1` | Living Room Light | no |
//! | Thermostat | `T1` | Living Room Thermostat | yes |
//! | Smart speaker | `S1` | Living Room Speaker | no |
//!
//! [`FixedWeather`] stands in for an outdoor temperature sensor.
//!
//! ## Dependency rule
//!
//! Depends on `homectl-app` (port traits) and `homectl-domain` only.

mod living_room;
mod weather;

pub use living_room::{LOCATION, LivingRoom};
pub use weather::{DEFAULT_OUTDOOR_TEMPERATURE, FixedWeather};
