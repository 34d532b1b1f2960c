use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{MessageResponse, RegisterRequest};
use crate::handlers::error::{handle_domain_error, validation_message};
use crate::routes::AppState;

use sd_core::repositories::{EmployeeRepository, RoleRepository, UserRepository};
use sd_shared::types::response::ErrorResponse;

/// Handler for POST /api/auth/register-user
///
/// Registers a new identity and grants it the USER role. All request
/// shape violations are aggregated into a single message; password
/// policy and duplicate-email failures come back from the service.
pub async fn register<U, R, E>(
    state: web::Data<AppState<U, R, E>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    E: EmployeeRepository + 'static,
{
    if let Err(errors) = request.validate() {
        let message = validation_message(&errors);
        log::warn!("Registration rejected: {}", message);
        return HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message));
    }

    match state
        .auth_service
        .register(
            &request.email,
            &request.first_name,
            &request.last_name,
            &request.password,
        )
        .await
    {
        Ok(_user) => HttpResponse::Ok().json(MessageResponse::new("User created successfully")),
        Err(error) => handle_domain_error(error),
    }
}
