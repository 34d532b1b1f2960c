//! Application factory
//!
//! Builds the actix-web application with all routes, middleware, and
//! shared state. The factory is generic over the repository types so
//! integration tests can wire in the in-memory mocks.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{login::login, register::register, seed_roles::seed_roles};
use crate::routes::employees::{
    create::create, delete::delete, get::get, list::list, search::search, update::update,
};
use crate::routes::AppState;

use sd_core::repositories::{EmployeeRepository, RoleRepository, UserRepository};
use sd_shared::types::response::ErrorResponse;

/// Create and configure the application with all dependencies
pub fn create_app<U, R, E>(
    app_state: web::Data<AppState<U, R, E>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    E: EmployeeRepository + 'static,
{
    let cors = create_cors();
    let jwt_auth = JwtAuth::new(app_state.token_service.clone());

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/seed-roles", web::post().to(seed_roles::<U, R, E>))
                        .route("/register-user", web::post().to(register::<U, R, E>))
                        .route("/login", web::post().to(login::<U, R, E>)),
                )
                .service(
                    web::scope("/employees")
                        .wrap(jwt_auth)
                        .route("", web::get().to(list::<U, R, E>))
                        .route("", web::post().to(create::<U, R, E>))
                        // registered before /{id} so "search" never parses as an id
                        .route("/search", web::get().to(search::<U, R, E>))
                        .route("/{id}", web::get().to(get::<U, R, E>))
                        .route("/{id}", web::put().to(update::<U, R, E>))
                        .route("/{id}", web::delete().to(delete::<U, R, E>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "staffdesk-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        "The requested resource was not found",
    ))
}
