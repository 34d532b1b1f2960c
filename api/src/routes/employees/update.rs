use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{EmployeeRequest, EmployeeResponse};
use crate::handlers::error::{handle_domain_error, validation_message};
use crate::routes::AppState;

use sd_core::repositories::{EmployeeRepository, RoleRepository, UserRepository};
use sd_shared::types::response::ErrorResponse;

/// Handler for PUT /api/employees/{id}
///
/// Full replace of the mutable fields; last writer wins.
pub async fn update<U, R, E>(
    state: web::Data<AppState<U, R, E>>,
    path: web::Path<Uuid>,
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
        .update(path.into_inner(), request.into_inner().into_draft())
        .await
    {
        Ok(employee) => HttpResponse::Ok().json(EmployeeResponse::from(employee)),
        Err(error) => handle_domain_error(error),
    }
}
