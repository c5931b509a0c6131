//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HomeError`]
//! via `#[from]` (or an explicit `From` impl for adapter errors).

use crate::user::Capability;

/// Base error for every fallible operation in homectl.
#[derive(Debug, thiserror::Error)]
pub enum HomeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    AccessDenied(#[from] AccessDenied),

    /// Resource failure reported by an adapter (socket, file, …).
    #[error("io error: {0}")]
    Io(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain precondition was not met. The operation was aborted and the
/// device state is unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("device id must not be empty")]
    EmptyId,

    #[error("device name must not be empty")]
    EmptyName,

    #[error("Invalid brightness level {level}. Must be between 0 and 100.")]
    BrightnessOutOfRange { level: i32 },

    #[error("{name} is OFF. Cannot play music.")]
    PoweredOff { name: String },

    #[error("{name} does not support {operation}")]
    UnsupportedOperation {
        name: String,
        operation: &'static str,
    },
}

/// A lookup by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The current session lacks the capability an action requires.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{username} is not allowed to {capability}")]
pub struct AccessDenied {
    pub username: String,
    pub capability: Capability,
}
