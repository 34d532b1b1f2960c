//! Domain entities representing core business objects.

pub mod employee;
pub mod role;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use employee::{Employee, EmployeeDraft};
pub use role::Role;
pub use token::{Claims, IssuedToken, DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES};
pub use user::User;
