//! Project roles and the notifications addressed to them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A notification target role on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectRole {
    /// Facilitates the team; told about workflow moves.
    ScrumMaster,
    /// Told when work is ready for testing.
    Tester,
    /// Told when sprints are released, reviewed or cancelled.
    ProductOwner,
}

impl ProjectRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ScrumMaster => "scrum_master",
            Self::Tester => "tester",
            Self::ProductOwner => "product_owner",
        }
    }
}

impl fmt::Display for ProjectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message that a domain transition wants delivered to a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleNotification {
    role: ProjectRole,
    message: String,
}

impl RoleNotification {
    /// Creates a notification for `role`.
    #[must_use]
    pub fn new(role: ProjectRole, message: impl Into<String>) -> Self {
        Self {
            role,
            message: message.into(),
        }
    }

    /// Returns the target role.
    #[must_use]
    pub const fn role(&self) -> ProjectRole {
        self.role
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
