//! Authentication service module
//!
//! This module handles the credential side of the system:
//! - Role seeding (idempotent)
//! - User registration (always granted the USER role)
//! - Credential verification and token issuance on login
//! - Role grants declared on the service contract but exposed on no route

pub mod authorization;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use authorization::requires_role;
pub use password::{hash_password, verify_password, PasswordPolicy};
pub use service::{AuthService, SeedRolesOutcome};
