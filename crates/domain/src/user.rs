//! Users, roles and the static role → capability table.
//!
//! Passwords are compared as plaintext. This is a simulation harness; the
//! check exists for functional parity, not for security.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role assigned to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Guest,
    Maintenance,
    /// Any unrecognised role. Grants nothing.
    Other(String),
}

impl Role {
    /// Capabilities granted by this role.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        match self {
            Self::Admin => Capabilities {
                control_devices: true,
                view_logs: true,
            },
            Self::Guest => Capabilities {
                control_devices: true,
                view_logs: false,
            },
            Self::Maintenance => Capabilities {
                control_devices: false,
                view_logs: true,
            },
            Self::Other(_) => Capabilities::default(),
        }
    }

    /// Role name with a leading capital, for activity records.
    #[must_use]
    pub fn title(&self) -> String {
        let name = self.to_string();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => name,
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            "guest" => Self::Guest,
            "maintenance" => Self::Maintenance,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => f.write_str("admin"),
            Self::Guest => f.write_str("guest"),
            Self::Maintenance => f.write_str("maintenance"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// A single permission an action may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ControlDevices,
    ViewLogs,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ControlDevices => f.write_str("control devices"),
            Self::ViewLogs => f.write_str("view logs"),
        }
    }
}

/// Capability flags derived from a role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub control_devices: bool,
    pub view_logs: bool,
}

impl Capabilities {
    /// Whether `capability` is granted.
    #[must_use]
    pub fn allows(self, capability: Capability) -> bool {
        match capability {
            Capability::ControlDevices => self.control_devices,
            Capability::ViewLogs => self.view_logs,
        }
    }
}

/// A user with a static credential.
#[derive(Debug, Clone)]
pub struct User {
    username: String,
    password: String,
    role: Role,
    capabilities: Capabilities,
}

impl User {
    /// Create a user; capabilities are computed once from `role`.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        let capabilities = role.capabilities();
        Self {
            username: username.into(),
            password: password.into(),
            role,
            capabilities,
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn role(&self) -> &Role {
        &self.role
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    #[must_use]
    pub fn can_control(&self) -> bool {
        self.capabilities.control_devices
    }

    #[must_use]
    pub fn can_view(&self) -> bool {
        self.capabilities.view_logs
    }

    /// Exact, case-sensitive comparison against the stored password.
    #[must_use]
    pub fn authenticate(&self, input: &str) -> bool {
        input == self.password
    }
}
