//! Request and response DTOs for the HTTP surface.

pub mod auth;
pub mod employee;

pub use auth::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
pub use employee::{EmployeeRequest, EmployeeResponse, EmployeeSearchQuery};
