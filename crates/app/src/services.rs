//! Application services: use-case implementations.
//!
//! Services accept port implementations via generic parameters or shared
//! handles, keeping this layer decoupled from concrete adapters.

pub mod access;
pub mod device_handle;
pub mod registry;
pub mod scheduler;
