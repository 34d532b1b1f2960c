//! End-to-end tests for the employee CRUD endpoints behind the bearer
//! middleware, wired against the in-memory repositories.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use serde_json::{json, Value};
use uuid::Uuid;

use sd_api::app::create_app;
use sd_api::routes::AppState;
use sd_core::domain::entities::role::Role;
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

    web::Data::new(AppState {
        auth_service: Arc::new(AuthService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockRoleRepository::seeded()),
            token_service.clone(),
        )),
        employee_service: Arc::new(EmployeeService::new(Arc::new(
            MockEmployeeRepository::new(),
        ))),
        token_service,
    })
}

fn bearer(state: &web::Data<TestState>) -> String {
    let issued = state
        .token_service
        .issue(Uuid::new_v4(), "tester@example.com", &[Role::User])
        .unwrap();
    format!("Bearer {}", issued.token)
}

fn employee_body(email: &str, code: &str) -> Value {
    json!({
        "name": "Grace Hopper",
        "employee_code": code,
        "email": email,
        "date_of_birth": "1906-12-09",
        "designation": "Rear Admiral",
        "salary": 120000,
        "joining_date": "1943-12-01"
    })
}

#[actix_rt::test]
async fn test_employee_routes_require_bearer() {
    let app = test::init_service(create_app(test_state())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/employees").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // The rejection is a regular response with the standard error body,
    // not a service-level error
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "missing_bearer_token");
}

#[actix_rt::test]
async fn test_token_signed_with_other_secret_rejected() {
    let state = test_state();
    let app = test::init_service(create_app(state)).await;

    let other = TokenService::new(TokenServiceConfig {
        secret: "a-different-secret".to_string(),
        ..TokenServiceConfig::default()
    })
    .unwrap();
    let issued = other
        .issue(Uuid::new_v4(), "intruder@example.com", &[Role::User])
        .unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/employees")
            .insert_header(("Authorization", format!("Bearer {}", issued.token)))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_token");
}

#[actix_rt::test]
async fn test_create_and_get_round_trip() {
    let state = test_state();
    let auth = bearer(&state);
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/employees")
            .insert_header(("Authorization", auth.clone()))
            .set_json(employee_body("grace@example.com", "EMP001"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["name"], "Grace Hopper");
    assert_eq!(created["salary"], 120000);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/employees/{}", id))
            .insert_header(("Authorization", auth.clone()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["employee_code"], "EMP001");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/employees")
            .insert_header(("Authorization", auth))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let listed: Value = test::read_body_json(resp).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[actix_rt::test]
async fn test_create_with_negative_salary_rejected() {
    let state = test_state();
    let auth = bearer(&state);
    let app = test::init_service(create_app(state)).await;

    let mut body = employee_body("neg@example.com", "EMP002");
    body["salary"] = json!(-1);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/employees")
            .insert_header(("Authorization", auth))
            .set_json(body)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "out_of_range");
}

#[actix_rt::test]
async fn test_create_with_blank_name_rejected() {
    let state = test_state();
    let auth = bearer(&state);
    let app = test::init_service(create_app(state)).await;

    let mut body = employee_body("blank@example.com", "EMP003");
    body["name"] = json!("");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/employees")
            .insert_header(("Authorization", auth))
            .set_json(body)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_search_by_email_and_code() {
    let state = test_state();
    let auth = bearer(&state);
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/employees")
            .insert_header(("Authorization", auth.clone()))
            .set_json(employee_body("search@example.com", "EMP010"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/employees/search?emailID=search@example.com")
            .insert_header(("Authorization", auth.clone()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let found: Value = test::read_body_json(resp).await;
    assert_eq!(found["employee_code"], "EMP010");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/employees/search?empCode=EMP010")
            .insert_header(("Authorization", auth.clone()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Both keys empty is a request error, not a miss
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/employees/search")
            .insert_header(("Authorization", auth.clone()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/employees/search?emailID=missing@example.com")
            .insert_header(("Authorization", auth))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_update_replaces_fields() {
    let state = test_state();
    let auth = bearer(&state);
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/employees")
            .insert_header(("Authorization", auth.clone()))
            .set_json(employee_body("upd@example.com", "EMP020"))
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    let mut body = employee_body("upd@example.com", "EMP020");
    body["designation"] = json!("Commodore");
    body["salary"] = json!(150000);

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/employees/{}", id))
            .insert_header(("Authorization", auth))
            .set_json(body)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["designation"], "Commodore");
    assert_eq!(updated["salary"], 150000);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[actix_rt::test]
async fn test_update_unknown_id_is_404() {
    let state = test_state();
    let auth = bearer(&state);
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/employees/{}", Uuid::new_v4()))
            .insert_header(("Authorization", auth))
            .set_json(employee_body("ghost@example.com", "EMP030"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_delete_then_get_is_404() {
    let state = test_state();
    let auth = bearer(&state);
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/employees")
            .insert_header(("Authorization", auth.clone()))
            .set_json(employee_body("del@example.com", "EMP040"))
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/employees/{}", id))
            .insert_header(("Authorization", auth.clone()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/employees/{}", id))
            .insert_header(("Authorization", auth.clone()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/employees/{}", id))
            .insert_header(("Authorization", auth))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
