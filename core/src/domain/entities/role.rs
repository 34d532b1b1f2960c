//! Role definitions for role-based authorization.
//!
//! Roles form a fixed, closed set. They are seeded once at startup (or via
//! the seed endpoint) and registration always grants [`Role::User`].

use serde::{Deserialize, Serialize};

/// A named authorization role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Default role granted on registration
    User,
    /// Administrative role (no self-service path to acquire it)
    Admin,
    /// Highest privilege role
    SuperAdmin,
}

impl Role {
    /// The complete fixed role set, in seeding order
    pub const ALL: [Role; 3] = [Role::User, Role::Admin, Role::SuperAdmin];

    /// Stable string form used in storage and token claims
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
            Role::SuperAdmin => "SUPER_ADMIN",
        }
    }

    /// Parse a stored role name back into the closed set
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "USER" => Some(Role::User),
            "ADMIN" => Some(Role::Admin),
            "SUPER_ADMIN" => Some(Role::SuperAdmin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
