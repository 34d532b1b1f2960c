use actix_web::{web, HttpResponse};

use crate::dto::{EmployeeResponse, EmployeeSearchQuery};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use sd_core::errors::DomainError;
use sd_core::repositories::{EmployeeRepository, RoleRepository, UserRepository};

/// Handler for GET /api/employees/search?emailID=&empCode=
///
/// Point lookup by email or employee code. Email takes precedence when
/// both are supplied; both empty is a request error.
pub async fn search<U, R, E>(
    state: web::Data<AppState<U, R, E>>,
    query: web::Query<EmployeeSearchQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    E: EmployeeRepository + 'static,
{
    let email = query.email_id.as_deref().unwrap_or("").trim();
    let code = query.emp_code.as_deref().unwrap_or("").trim();

    let result = if !email.is_empty() {
        state.employee_service.find_by_email(email).await
    } else if !code.is_empty() {
        state.employee_service.find_by_code(code).await
    } else {
        Err(DomainError::Validation {
            message: "Either emailID or empCode query parameter is required".to_string(),
        })
    };

    match result {
        Ok(employee) => HttpResponse::Ok().json(EmployeeResponse::from(employee)),
        Err(error) => handle_domain_error(error),
    }
}
