//! # homectld: home-automation controller daemon
//!
//! Composition root that wires the adapters together and drives one
//! controller run.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Construct the console sink, TCP endpoint, activity log and weather
//!   source (adapters)
//! - Run the controller flow, injecting adapters via port traits
//! - Cancel the status monitor before exit
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer. No domain logic belongs here.

pub mod config;
pub mod console;
pub mod run;
