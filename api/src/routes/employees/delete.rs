use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use sd_core::repositories::{EmployeeRepository, RoleRepository, UserRepository};

/// Handler for DELETE /api/employees/{id}
///
/// Hard delete; 204 on success, 404 when the record does not exist.
pub async fn delete<U, R, E>(
    state: web::Data<AppState<U, R, E>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    E: EmployeeRepository + 'static,
{
    let id = path.into_inner();
    match state.employee_service.delete(id).await {
        Ok(()) => {
            log::info!("Employee {} deleted by {}", id, auth.username);
            HttpResponse::NoContent().finish()
        }
        Err(error) => handle_domain_error(error),
    }
}
