//! Token entities for JWT-based authentication.
//!
//! Tokens are stateless: nothing is persisted and nothing is revocable.
//! A token ceases to have effect only by reaching its expiry.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token expiration time (30 minutes)
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 30;

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username, i.e. the user's email)
    pub sub: String,

    /// The user's unique identifier
    pub uid: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (fresh random nonce per token)
    pub jti: String,

    /// Roles held by the user at issuance time (possibly empty)
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `username` - The user's email/username
    /// * `roles` - The role names held at issuance time
    /// * `issuer` / `audience` - Validation scoping identifiers
    /// * `expiry_minutes` - Token lifetime from now
    pub fn new_access_token(
        user_id: Uuid,
        username: &str,
        roles: Vec<String>,
        issuer: &str,
        audience: &str,
        expiry_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(expiry_minutes);

        Self {
            sub: username.to_string(),
            uid: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
            roles,
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.uid)
    }

    /// Checks whether the claims carry the given role name
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// A freshly signed token handed back to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The signed compact JWT
    pub token: String,

    /// Seconds until the token expires
    pub expires_in: i64,
}

impl IssuedToken {
    /// Creates a new issued token with a lifetime in minutes
    pub fn new(token: String, expiry_minutes: i64) -> Self {
        Self {
            token,
            expires_in: expiry_minutes * 60,
        }
    }
}
