//! End-to-end tests for the authentication endpoints, wired against the
//! in-memory repositories.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use serde_json::{json, Value};

use sd_api::app::create_app;
use sd_api::routes::AppState;
use sd_core::repositories::{MockEmployeeRepository, MockRoleRepository, MockUserRepository};
use sd_core::services::auth::AuthService;
use sd_core::services::employee::EmployeeService;
use sd_core::services::token::{TokenService, TokenServiceConfig};

type TestState = AppState<MockUserRepository, MockRoleRepository, MockEmployeeRepository>;

fn test_state() -> web::Data<TestState> {
    let token_service = Arc::new(
        TokenService::new(TokenServiceConfig {
            secret: "integration-test-secret".to_string(),
            ..TokenServiceConfig::default()
        })
        .unwrap(),
    );

    let user_repository = Arc::new(MockUserRepository::new());
    let role_repository = Arc::new(MockRoleRepository::new());
    let employee_repository = Arc::new(MockEmployeeRepository::new());

    web::Data::new(AppState {
        auth_service: Arc::new(AuthService::new(
            user_repository,
            role_repository,
            token_service.clone(),
        )),
        employee_service: Arc::new(EmployeeService::new(employee_repository)),
        token_service,
    })
}

fn register_body(email: &str) -> Value {
    json!({
        "email": email,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "password": "S3cret!pass"
    })
}

#[actix_rt::test]
async fn test_health_check() {
    let app = test::init_service(create_app(test_state())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_rt::test]
async fn test_seed_roles_is_idempotent() {
    let app = test::init_service(create_app(test_state())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/seed-roles")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Roles seeding succeeded");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/seed-roles")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Roles seeding is already done");
}

#[actix_rt::test]
async fn test_register_then_login_round_trip() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register-user")
            .set_json(register_body("ada@example.com"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User created successfully");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "ada@example.com", "password": "S3cret!pass"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["expires_in"], 1800);

    // The issued token decodes with the USER role granted at registration
    let token = body["token"].as_str().unwrap();
    let claims = state.token_service.validate(token).unwrap();
    assert_eq!(claims.sub, "ada@example.com");
    assert_eq!(claims.roles, vec!["USER".to_string()]);
}

#[actix_rt::test]
async fn test_register_duplicate_email_rejected() {
    let app = test::init_service(create_app(test_state())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register-user")
            .set_json(register_body("dup@example.com"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register-user")
            .set_json(register_body("dup@example.com"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "email_taken");
}

#[actix_rt::test]
async fn test_register_weak_password_aggregates_violations() {
    let app = test::init_service(create_app(test_state())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register-user")
            .set_json(json!({
                "email": "weak@example.com",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "password": "short"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "password_policy");
    // Multiple violations are joined with the " # " marker
    assert!(body["message"].as_str().unwrap().contains(" # "));
}

#[actix_rt::test]
async fn test_register_invalid_email_rejected() {
    let app = test::init_service(create_app(test_state())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register-user")
            .set_json(register_body("not-an-email"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");
}

#[actix_rt::test]
async fn test_login_failures_are_indistinguishable() {
    let app = test::init_service(create_app(test_state())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register-user")
            .set_json(register_body("known@example.com"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let unknown = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "nobody@example.com", "password": "S3cret!pass"}))
            .to_request(),
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    let unknown_body: Value = test::read_body_json(unknown).await;

    let wrong = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "known@example.com", "password": "WrongPass1!"}))
            .to_request(),
    )
    .await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    let wrong_body: Value = test::read_body_json(wrong).await;

    // Identical error code and message for unknown email and wrong password
    assert_eq!(unknown_body["error"], wrong_body["error"]);
    assert_eq!(unknown_body["message"], wrong_body["message"]);
    assert_eq!(unknown_body["message"], "Invalid credentials");
}

#[actix_rt::test]
async fn test_unknown_route_returns_json_404() {
    let app = test::init_service(create_app(test_state())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/nope").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}
