//! Access gate: authenticate a user and hand out a capability-checked session.

use homectl_domain::error::AccessDenied;
use homectl_domain::user::{Capabilities, Capability, Role, User};

use crate::ports::ActivityLog;

/// Outcome of a login attempt.
///
/// A failed login yields an anonymous session with no capabilities, so
/// every [`require`](Self::require) call on it is denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
    role: Option<Role>,
    capabilities: Capabilities,
}

impl Session {
    fn authenticated(user: &User) -> Self {
        Self {
            username: user.username().to_string(),
            role: Some(user.role().clone()),
            capabilities: user.capabilities(),
        }
    }

    fn anonymous(username: &str) -> Self {
        Self {
            username: username.to_string(),
            role: None,
            capabilities: Capabilities::default(),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    /// Check that this session may perform actions needing `capability`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when the role does not grant it or the
    /// login failed.
    pub fn require(&self, capability: Capability) -> Result<(), AccessDenied> {
        if self.capabilities.allows(capability) {
            Ok(())
        } else {
            tracing::warn!(username = %self.username, %capability, "capability denied");
            Err(AccessDenied {
                username: self.username.clone(),
                capability,
            })
        }
    }
}

/// Authenticates users and records the outcome in the activity log.
pub struct AccessGate<L> {
    log: L,
}

impl<L: ActivityLog> AccessGate<L> {
    #[must_use]
    pub fn new(log: L) -> Self {
        Self { log }
    }

    /// Check `password` against `user` and open a session.
    ///
    /// Failures are logged; there is no lockout and no retry limit.
    pub fn login(&self, user: &User, password: &str) -> Session {
        if user.authenticate(password) {
            tracing::info!(username = user.username(), role = %user.role(), "login succeeded");
            self.log
                .record(&format!("{} logged in.", user.role().title()));
            Session::authenticated(user)
        } else {
            tracing::warn!(username = user.username(), "login failed");
            self.log.record("Failed login attempt.");
            Session::anonymous(user.username())
        }
    }
}
