//! Weather port: outdoor temperature readings.

use std::future::Future;

use homectl_domain::error::HomeError;

/// Provides the current outdoor temperature in °F.
pub trait WeatherSource {
    /// Read the current outdoor temperature.
    fn outdoor_temperature(&self) -> impl Future<Output = Result<f64, HomeError>> + Send;
}
