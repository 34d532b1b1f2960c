use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{EmployeeRequest, EmployeeResponse};
use crate::handlers::error::{handle_domain_error, validation_message};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use sd_core::repositories::{EmployeeRepository, RoleRepository, UserRepository};
use sd_shared::types::response::ErrorResponse;

/// Handler for POST /api/employees
///
/// Creates a new employee record and returns it with a 201.
pub async fn create<U, R, E>(
    state: web::Data<AppState<U, R, E>>,
    auth: AuthContext,
    request: web::Json<EmployeeRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    E: EmployeeRepository + 'static,
{
    if let Err(errors) = request.validate() {
        let message = validation_message(&errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message));
    }

    match state
        .employee_service
        .create(request.into_inner().into_draft())
        .await
    {
        Ok(employee) => {
            log::info!("Employee {} created by {}", employee.id, auth.username);
            HttpResponse::Created().json(EmployeeResponse::from(employee))
        }
        Err(error) => handle_domain_error(error),
    }
}
