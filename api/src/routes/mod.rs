//! Route handlers grouped by resource.

pub mod auth;
pub mod employees;

use std::sync::Arc;

use sd_core::repositories::{EmployeeRepository, RoleRepository, UserRepository};
use sd_core::services::auth::AuthService;
use sd_core::services::employee::EmployeeService;
use sd_core::services::token::TokenService;

/// Application state that holds shared services
pub struct AppState<U, R, E>
where
    U: UserRepository,
    R: RoleRepository,
    E: EmployeeRepository,
{
    pub auth_service: Arc<AuthService<U, R>>,
    pub employee_service: Arc<EmployeeService<E>>,
    pub token_service: Arc<TokenService>,
}
