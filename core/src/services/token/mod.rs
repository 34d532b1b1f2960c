//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - JWT access token issuance
//! - Token validation for the bearer middleware
//!
//! Tokens are stateless. There is no refresh flow, no blacklist, and no
//! revocation: a token remains valid until its natural expiry.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
