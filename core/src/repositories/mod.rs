//! Repository interfaces for data persistence.
//!
//! Concrete database-backed implementations live in the infra crate;
//! in-memory mock implementations live alongside each trait for tests.

pub mod employee;
pub mod role;
pub mod user;

pub use employee::{EmployeeRepository, MockEmployeeRepository};
pub use role::{MockRoleRepository, RoleRepository};
pub use user::{MockUserRepository, UserRepository};
