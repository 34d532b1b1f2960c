//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the StaffDesk
//! application. It provides the concrete MySQL-backed implementations of
//! the repository traits defined in `sd_core`, plus connection-pool
//! management.

pub mod database;

pub use database::connection::DatabasePool;
pub use database::mysql::{MySqlEmployeeRepository, MySqlRoleRepository, MySqlUserRepository};

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
