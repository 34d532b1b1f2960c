use actix_web::{web, HttpResponse};

use crate::dto::EmployeeResponse;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use sd_core::repositories::{EmployeeRepository, RoleRepository, UserRepository};

/// Handler for GET /api/employees
pub async fn list<U, R, E>(state: web::Data<AppState<U, R, E>>) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    E: EmployeeRepository + 'static,
{
    match state.employee_service.list().await {
        Ok(employees) => {
            let body: Vec<EmployeeResponse> =
                employees.into_iter().map(EmployeeResponse::from).collect();
            HttpResponse::Ok().json(body)
        }
        Err(error) => handle_domain_error(error),
    }
}
