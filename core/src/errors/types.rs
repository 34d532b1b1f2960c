//! Domain-specific error types for authentication and related operations
//!
//! These error type definitions are mapped to HTTP responses in the
//! presentation layer; the messages here are the single canonical wording.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Single undifferentiated login failure. Unknown email and wrong
    /// password both produce this variant so the response never reveals
    /// whether an account exists.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User with the email {email} is already registered")]
    EmailTaken { email: String },

    #[error("Password does not meet the policy: {violations}")]
    PasswordPolicy { violations: String },

    #[error("User not found")]
    UserNotFound,

    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

/// Token-related errors
///
/// Every variant maps to "unauthenticated" at the HTTP boundary; there is
/// no partial or degraded success.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token audience or issuer mismatch")]
    AudienceMismatch,

    #[error("Invalid token format")]
    InvalidFormat,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Out of range: {field} (min: {min})")]
    OutOfRange { field: String, min: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Duplicate value: {field}")]
    DuplicateValue { field: String },
}
