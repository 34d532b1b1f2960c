//! User entity representing a registered identity in the StaffDesk system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered identity
///
/// The email doubles as the username and is unique across all identities.
/// The password hash is opaque to everything outside the credential store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, also used as the username
    pub email: String,

    /// Bcrypt hash of the user's password, never serialized to clients
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// User's first name
    pub first_name: String,

    /// User's last name
    pub last_name: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            first_name,
            last_name,
            created_at: now,
            updated_at: now,
        }
    }

    /// The username presented in token claims
    pub fn username(&self) -> &str {
        &self.email
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            "a@x.com".to_string(),
            "$2b$12$hash".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
        );

        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.username(), "a@x.com");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new(
            "a@x.com".to_string(),
            "super-secret-hash".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
        );

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("super-secret-hash"));
    }
}
