//! # homectl-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `StatusSink`: the operator-facing console channel
//!   - `ActivityLog`: append-only activity records
//!   - `MessageEndpoint`: single-exchange network endpoint
//!   - `WeatherSource`: outdoor temperature readings
//! - Provide the **use-cases**:
//!   - `DeviceHandle` / `DeviceRegistry`: shared device access and bulk sweeps
//!   - `Scheduler`: labelled actions run in registration order
//!   - `AccessGate`: role-based sessions
//! - Provide the background **status monitor**
//!
//! ## Dependency rule
//! Depends on `homectl-domain` only (plus `tokio` for the monitor task).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod monitor;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
