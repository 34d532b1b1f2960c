//! Business services orchestrating domain operations.

pub mod auth;
pub mod employee;
pub mod token;

// Re-export commonly used services
pub use auth::{AuthService, SeedRolesOutcome};
pub use employee::EmployeeService;
pub use token::{TokenService, TokenServiceConfig};
