//! Authentication route handlers
//!
//! - Idempotent role seeding
//! - User registration (always granted the USER role)
//! - Login issuing a bearer token

pub mod login;
pub mod register;
pub mod seed_roles;
