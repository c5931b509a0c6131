//! # homectl-domain
//!
//! Pure domain model for the homectl home automation controller.
//!
//! ## Responsibilities
//! - Foundational types: device identifiers, error conventions, timestamps
//! - Define **Devices** (lights, thermostats, smart speakers) and the
//!   invariants on their kind-specific attributes
//! - Define **Device events** (the human-readable record of every state change)
//! - Define **Status snapshots** (read-only views used by monitors and sinks)
//! - Define **Maintenance alerts**
//! - Define **Users, roles and capabilities** (the static access table)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod alert;
pub mod device;
pub mod event;
pub mod status;
pub mod user;
