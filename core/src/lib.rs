//! # StaffDesk Core
//!
//! Core business logic and domain layer for the StaffDesk backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Employee, EmployeeDraft, IssuedToken, Role, User};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{
    EmployeeRepository, MockEmployeeRepository, MockRoleRepository, MockUserRepository,
    RoleRepository, UserRepository,
};
pub use services::{
    AuthService, EmployeeService, SeedRolesOutcome, TokenService, TokenServiceConfig,
};
