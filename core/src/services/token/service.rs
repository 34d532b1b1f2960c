//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::role::Role;
use crate::domain::entities::token::{Claims, IssuedToken};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service producing and validating signed, time-bounded bearer tokens
///
/// Issuance and validation are pure computations over the configured
/// symmetric key; the service holds no mutable state and is safe to share
/// across request handlers.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or `DomainError::Configuration` when the
    /// signing secret is absent. Callers must treat that as a fatal
    /// startup condition, not a per-request error.
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.secret.trim().is_empty() {
            return Err(DomainError::Configuration {
                message: "JWT signing secret is not configured".to_string(),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a signed access token for a verified identity
    ///
    /// # Arguments
    ///
    /// * `user_id` - The identity's UUID
    /// * `username` - The identity's email/username
    /// * `roles` - The role set held at issuance time (possibly empty)
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - Opaque signed token plus its lifetime
    /// * `Err(DomainError)` - Signing failed
    ///
    /// No side effects: neither the token nor its nonce is persisted.
    pub fn issue(
        &self,
        user_id: Uuid,
        username: &str,
        roles: &[Role],
    ) -> Result<IssuedToken, DomainError> {
        let role_names = roles.iter().map(|r| r.as_str().to_string()).collect();
        let claims = Claims::new_access_token(
            user_id,
            username,
            role_names,
            &self.config.issuer,
            &self.config.audience,
            self.config.access_token_expiry_minutes,
        );

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))?;

        Ok(IssuedToken::new(
            token,
            self.config.access_token_expiry_minutes,
        ))
    }

    /// Validates a bearer token and returns the embedded claims
    ///
    /// Verifies the signature against the configured key, the expiry,
    /// and the issuer/audience scoping. Every failure maps to
    /// "unauthenticated" downstream; there is no partial success.
    pub fn validate(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                let token_error = match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => {
                        TokenError::AudienceMismatch
                    }
                    _ => TokenError::InvalidFormat,
                };
                DomainError::Token(token_error)
            })?;

        Ok(token_data.claims)
    }

    /// The configured token lifetime in minutes
    pub fn expiry_minutes(&self) -> i64 {
        self.config.access_token_expiry_minutes
    }
}
