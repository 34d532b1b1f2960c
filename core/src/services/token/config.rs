//! Configuration for the token service

use sd_shared::config::JwtConfig;

use crate::domain::entities::token::DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret (HMAC-SHA-256), shared with the validator
    pub secret: String,
    /// Issuer claim embedded and verified
    pub issuer: String,
    /// Audience claim embedded and verified
    pub audience: String,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            issuer: "staffdesk".to_string(),
            audience: "staffdesk-api".to_string(),
            access_token_expiry_minutes: DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES,
        }
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            secret: config.secret,
            issuer: config.issuer,
            audience: config.audience,
            access_token_expiry_minutes: config.access_token_expiry_minutes,
        }
    }
}
