use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{LoginRequest, LoginResponse};
use crate::handlers::error::{handle_domain_error, validation_message};
use crate::routes::AppState;

use sd_core::repositories::{EmployeeRepository, RoleRepository, UserRepository};
use sd_shared::types::response::ErrorResponse;

/// Handler for POST /api/auth/login
///
/// Verifies credentials and returns a signed bearer token. Unknown email
/// and wrong password produce the identical 401 body.
pub async fn login<U, R, E>(
    state: web::Data<AppState<U, R, E>>,
    request: web::Json<LoginRequest>,
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
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(issued) => HttpResponse::Ok().json(LoginResponse {
            token: issued.token,
            expires_in: issued.expires_in,
        }),
        Err(error) => handle_domain_error(error),
    }
}
