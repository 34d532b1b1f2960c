use actix_web::{web, HttpResponse};

use crate::dto::MessageResponse;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use sd_core::repositories::{EmployeeRepository, RoleRepository, UserRepository};

/// Handler for POST /api/auth/seed-roles
///
/// Ensures the three fixed roles exist. Idempotent: a repeat call reports
/// that seeding is already done without touching storage.
pub async fn seed_roles<U, R, E>(state: web::Data<AppState<U, R, E>>) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    E: EmployeeRepository + 'static,
{
    match state.auth_service.seed_roles().await {
        Ok(outcome) => HttpResponse::Ok().json(MessageResponse::new(outcome.message())),
        Err(error) => handle_domain_error(error),
    }
}
