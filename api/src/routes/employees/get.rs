use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::EmployeeResponse;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use sd_core::repositories::{EmployeeRepository, RoleRepository, UserRepository};

/// Handler for GET /api/employees/{id}
pub async fn get<U, R, E>(
    state: web::Data<AppState<U, R, E>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    E: EmployeeRepository + 'static,
{
    match state.employee_service.get(path.into_inner()).await {
        Ok(employee) => HttpResponse::Ok().json(EmployeeResponse::from(employee)),
        Err(error) => handle_domain_error(error),
    }
}
