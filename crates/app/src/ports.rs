//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod activity_log;
pub mod endpoint;
pub mod status_sink;
pub mod weather;

pub use activity_log::ActivityLog;
pub use endpoint::MessageEndpoint;
pub use status_sink::{SharedSink, StatusSink};
pub use weather::WeatherSource;
