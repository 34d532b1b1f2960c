//! Password hashing and policy checks
//!
//! Hashing delegates wholesale to the bcrypt crate; this module only adds
//! the registration-time policy and uniform error mapping.

use crate::errors::{AuthError, DomainError};

/// Minimum accepted password length
const MIN_PASSWORD_LENGTH: usize = 8;

/// Registration password policy
///
/// Violations are collected rather than short-circuited so the caller can
/// report every problem in one response.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordPolicy;

impl PasswordPolicy {
    /// Check a candidate password, returning all violations
    pub fn check(&self, password: &str) -> Vec<String> {
        let mut violations = Vec::new();

        if password.len() < MIN_PASSWORD_LENGTH {
            violations.push(format!(
                "Passwords must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ));
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            violations.push("Passwords must have at least one digit".to_string());
        }
        if password.chars().all(|c| c.is_alphanumeric()) {
            violations.push(
                "Passwords must have at least one non-alphanumeric character".to_string(),
            );
        }

        violations
    }

    /// Check a candidate password, aggregating violations into one error
    ///
    /// The violations are joined with the " # " marker the registration
    /// endpoint surfaces to clients.
    pub fn enforce(&self, password: &str) -> Result<(), DomainError> {
        let violations = self.check(password);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Auth(AuthError::PasswordPolicy {
                violations: violations.join(" # "),
            }))
        }
    }
}

/// Hash a plaintext password with bcrypt
pub fn hash_password(password: &str) -> Result<String, DomainError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
        message: format!("Password hashing failed: {}", e),
    })
}

/// Verify a plaintext password against a stored bcrypt hash
///
/// A malformed stored hash verifies as false rather than erroring, so the
/// login path stays on the single undifferentiated failure.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
