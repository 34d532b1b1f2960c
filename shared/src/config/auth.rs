//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

/// Default access token lifetime in minutes
pub const DEFAULT_TOKEN_EXPIRY_MINUTES: i64 = 30;

/// JWT authentication configuration
///
/// The secret is shared between the token issuer and the bearer middleware.
/// An empty secret is a fatal startup condition, checked when the token
/// service is constructed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,

    /// Access token expiry time in minutes
    #[serde(default = "default_expiry_minutes")]
    pub access_token_expiry_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            issuer: String::from("staffdesk"),
            audience: String::from("staffdesk-api"),
            access_token_expiry_minutes: default_expiry_minutes(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with a secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    ///
    /// Reads `JWT_SECRET`, `JWT_ISSUER`, `JWT_AUDIENCE` and
    /// `JWT_EXPIRY_MINUTES`. A missing secret is left empty here so the
    /// token service can report it as a configuration error.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: std::env::var("JWT_SECRET").unwrap_or_default(),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or(defaults.audience),
            access_token_expiry_minutes: std::env::var("JWT_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expiry_minutes),
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry_minutes = minutes;
        self
    }

    /// Set issuer and audience claims
    pub fn with_claims_scope(
        mut self,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        self.issuer = issuer.into();
        self.audience = audience.into();
        self
    }

    /// Check whether a usable signing secret is present
    pub fn has_secret(&self) -> bool {
        !self.secret.trim().is_empty()
    }
}

fn default_expiry_minutes() -> i64 {
    DEFAULT_TOKEN_EXPIRY_MINUTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_secret() {
        let config = JwtConfig::default();
        assert!(!config.has_secret());
        assert_eq!(config.access_token_expiry_minutes, 30);
    }

    #[test]
    fn test_whitespace_secret_is_rejected() {
        let config = JwtConfig::new("   ");
        assert!(!config.has_secret());
    }

    #[test]
    fn test_builder_helpers() {
        let config = JwtConfig::new("top-secret")
            .with_access_expiry_minutes(5)
            .with_claims_scope("issuer-x", "audience-y");

        assert!(config.has_secret());
        assert_eq!(config.access_token_expiry_minutes, 5);
        assert_eq!(config.issuer, "issuer-x");
        assert_eq!(config.audience, "audience-y");
    }
}
