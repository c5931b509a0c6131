//! Fixed outdoor temperature reading.

use homectl_app::ports::WeatherSource;
use homectl_domain::error::HomeError;

/// Outdoor temperature reported when nothing else is configured, in °F.
pub const DEFAULT_OUTDOOR_TEMPERATURE: f64 = 68.5;

/// [`WeatherSource`] that always reports the same temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWeather {
    temperature: f64,
}

impl Default for FixedWeather {
    fn default() -> Self {
        Self::new(DEFAULT_OUTDOOR_TEMPERATURE)
    }
}

impl FixedWeather {
    #[must_use]
    pub fn new(temperature: f64) -> Self {
        Self { temperature }
    }
}

impl WeatherSource for FixedWeather {
    async fn outdoor_temperature(&self) -> Result<f64, HomeError> {
        tracing::debug!(temperature = self.temperature, "outdoor temperature read");
        Ok(self.temperature)
    }
}
