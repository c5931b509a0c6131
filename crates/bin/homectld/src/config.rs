//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `homectl.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use homectl_adapter_tcp::EndpointConfig;
use homectl_adapter_virtual::DEFAULT_OUTDOOR_TEMPERATURE;
use homectl_app::monitor::DEFAULT_INTERVAL;
use homectl_domain::user::{Role, User};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "homectl.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Network endpoint settings.
    pub server: ServerConfig,
    /// Status monitor settings.
    pub monitor: MonitorConfig,
    /// Activity log settings.
    pub activity_log: ActivityLogConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// The single administrator account.
    pub admin: AdminConfig,
    /// Simulated weather settings.
    pub weather: WeatherConfig,
}

/// Network endpoint configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address, backlog and timeouts.
    #[serde(flatten)]
    pub endpoint: EndpointConfig,
    /// Message sent to the first peer after start-up.
    pub greeting: String,
}

/// Status monitor configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Seconds between two status reports.
    pub interval_secs: u64,
}

/// Activity log configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ActivityLogConfig {
    /// File the activity records are appended to.
    pub path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Administrator credentials.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Simulated weather configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Outdoor temperature reported by the fixed weather source, in °F.
    pub outdoor_temperature: f64,
}

impl Config {
    /// Load configuration from `homectl.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("HOMECTL_HOST") {
            self.server.endpoint.host = val;
        }
        if let Some(port) = lookup("HOMECTL_PORT").and_then(|val| val.parse().ok()) {
            self.server.endpoint.port = port;
        }
        if let Some(secs) = lookup("HOMECTL_MONITOR_INTERVAL").and_then(|val| val.parse().ok()) {
            self.monitor.interval_secs = secs;
        }
        if let Some(val) = lookup("HOMECTL_ACTIVITY_LOG") {
            self.activity_log.path = PathBuf::from(val);
        }
        if let Some(val) = lookup("HOMECTL_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.endpoint.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.monitor.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "monitor interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        self.server.endpoint.bind_addr()
    }

    #[must_use]
    pub fn monitor_interval(&self) -> Duration {
        Duration::from_secs(self.monitor.interval_secs)
    }

    /// Build the administrator account.
    #[must_use]
    pub fn admin_user(&self) -> User {
        User::new(
            self.admin.username.clone(),
            self.admin.password.clone(),
            self.admin.role.clone(),
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
            greeting: "Thermostat updated to 72°F".to_string(),
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_INTERVAL.as_secs(),
        }
    }
}

impl Default for ActivityLogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("home_automation.log"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homectld=info,homectl=info".to_string(),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "password123".to_string(),
            role: Role::Admin,
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            outdoor_temperature: DEFAULT_OUTDOOR_TEMPERATURE,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
