use std::process::ExitCode;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{error, info};

mod app;
mod dto;
mod handlers;
mod middleware;
mod routes;

use routes::AppState;

use sd_core::services::auth::AuthService;
use sd_core::services::employee::EmployeeService;
use sd_core::services::token::{TokenService, TokenServiceConfig};
use sd_infra::database::connection::DatabasePool;
use sd_infra::database::mysql::{
    MySqlEmployeeRepository, MySqlRoleRepository, MySqlUserRepository,
};
use sd_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting StaffDesk API server");

    let config = AppConfig::from_env();

    // A missing signing secret is fatal: refuse to serve rather than
    // issue unverifiable tokens.
    let token_service = match TokenService::new(TokenServiceConfig::from(config.jwt.clone())) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            error!("Failed to initialize token service: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let pool = match DatabasePool::new(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to connect to the database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let role_repository = Arc::new(MySqlRoleRepository::new(pool.get_pool().clone()));
    let employee_repository = Arc::new(MySqlEmployeeRepository::new(pool.get_pool().clone()));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        role_repository,
        token_service.clone(),
    ));
    let employee_service = Arc::new(EmployeeService::new(employee_repository));

    let app_state = web::Data::new(AppState {
        auth_service,
        employee_service,
        token_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server binding to {}", bind_address);

    let server = match HttpServer::new(move || app::create_app(app_state.clone()))
        .bind(&bind_address)
    {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to bind to {}: {}", bind_address, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    pool.close().await;
    ExitCode::SUCCESS
}
