//! Admin user roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role stored on `users.role` and carried in access tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Manages announcements and may push content to the Publishing API.
    Admin,
    /// Drafts and maintains their organisation's announcements.
    #[default]
    Writer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Writer => "writer",
        }
    }

    /// Whether this role may publish and republish content on demand.
    pub fn can_publish(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
