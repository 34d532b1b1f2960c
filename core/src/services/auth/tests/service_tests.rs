//! Unit tests for the authentication service

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::role::Role;
use crate::errors::{AuthError, DomainError};
use crate::repositories::{MockRoleRepository, MockUserRepository, RoleRepository, UserRepository};
use crate::services::auth::{AuthService, SeedRolesOutcome};
use crate::services::token::{TokenService, TokenServiceConfig};

fn token_service() -> Arc<TokenService> {
    let config = TokenServiceConfig {
        secret: "test-secret-key-for-unit-tests".to_string(),
        issuer: "staffdesk".to_string(),
        audience: "staffdesk-api".to_string(),
        access_token_expiry_minutes: 30,
    };
    Arc::new(TokenService::new(config).unwrap())
}

fn service_with(
    users: Arc<MockUserRepository>,
    roles: Arc<MockRoleRepository>,
) -> AuthService<MockUserRepository, MockRoleRepository> {
    AuthService::new(users, roles, token_service())
}

fn fresh_service() -> (
    AuthService<MockUserRepository, MockRoleRepository>,
    Arc<MockUserRepository>,
    Arc<MockRoleRepository>,
) {
    let users = Arc::new(MockUserRepository::new());
    let roles = Arc::new(MockRoleRepository::seeded());
    (
        service_with(users.clone(), roles.clone()),
        users,
        roles,
    )
}

#[tokio::test]
async fn test_seed_roles_is_idempotent() {
    let users = Arc::new(MockUserRepository::new());
    let roles = Arc::new(MockRoleRepository::new());
    let service = service_with(users, roles.clone());

    let first = service.seed_roles().await.unwrap();
    assert_eq!(
        first,
        SeedRolesOutcome::Seeded {
            created: Role::ALL.to_vec()
        }
    );
    assert_eq!(roles.list().await.unwrap().len(), 3);

    let second = service.seed_roles().await.unwrap();
    assert_eq!(second, SeedRolesOutcome::AlreadyDone);
    assert_eq!(roles.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_seed_roles_creates_only_missing_subset() {
    let users = Arc::new(MockUserRepository::new());
    let roles = Arc::new(MockRoleRepository::new());
    roles.create(Role::User).await.unwrap();
    let service = service_with(users, roles.clone());

    let outcome = service.seed_roles().await.unwrap();
    assert_eq!(
        outcome,
        SeedRolesOutcome::Seeded {
            created: vec![Role::Admin, Role::SuperAdmin]
        }
    );
    assert_eq!(roles.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_register_grants_user_role() {
    let (service, users, roles) = fresh_service();

    let user = service
        .register("a@x.com", "Ada", "Lovelace", "Passw0rd!")
        .await
        .unwrap();

    let found = users.find_by_email("a@x.com").await.unwrap();
    assert!(found.is_some());

    let held = roles.roles_for_user(user.id).await.unwrap();
    assert_eq!(held, vec![Role::User]);
}

#[tokio::test]
async fn test_register_duplicate_email_fails() {
    let (service, users, _roles) = fresh_service();

    service
        .register("a@x.com", "Ada", "Lovelace", "Passw0rd!")
        .await
        .unwrap();

    let result = service
        .register("a@x.com", "Someone", "Else", "Passw0rd!")
        .await;
    match result {
        Err(DomainError::Auth(AuthError::EmailTaken { email })) => {
            assert_eq!(email, "a@x.com");
        }
        other => panic!("expected duplicate email error, got {:?}", other.err()),
    }

    assert_eq!(users.count_by_email("a@x.com").await.unwrap(), 1);
}

#[tokio::test]
async fn test_register_rejects_bad_email_and_weak_password() {
    let (service, _users, _roles) = fresh_service();

    assert!(service
        .register("not-an-email", "Ada", "Lovelace", "Passw0rd!")
        .await
        .is_err());

    let result = service.register("a@x.com", "Ada", "Lovelace", "weak").await;
    match result {
        Err(DomainError::Auth(AuthError::PasswordPolicy { violations })) => {
            assert!(violations.contains(" # "));
        }
        other => panic!("expected password policy error, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn test_login_issues_token_with_role_claims() {
    let (service, _users, _roles) = fresh_service();

    service
        .register("a@x.com", "Ada", "Lovelace", "Passw0rd!")
        .await
        .unwrap();

    let issued = service.login("a@x.com", "Passw0rd!").await.unwrap();
    assert_eq!(issued.expires_in, 30 * 60);

    let claims = token_service().validate(&issued.token).unwrap();
    assert_eq!(claims.sub, "a@x.com");
    assert_eq!(claims.roles, vec!["USER"]);

    let delta = claims.exp - Utc::now().timestamp();
    assert!((29 * 60..=30 * 60).contains(&delta));
}

#[tokio::test]
async fn test_login_failure_is_undifferentiated() {
    let (service, _users, _roles) = fresh_service();

    service
        .register("a@x.com", "Ada", "Lovelace", "Passw0rd!")
        .await
        .unwrap();

    let unknown = service.login("nobody@x.com", "Passw0rd!").await;
    let wrong_password = service.login("a@x.com", "WrongPass1!").await;

    // Unknown account and wrong password must be indistinguishable
    let unknown_msg = unknown.unwrap_err().to_string();
    let wrong_msg = wrong_password.unwrap_err().to_string();
    assert_eq!(unknown_msg, wrong_msg);
    assert_eq!(unknown_msg, "Invalid credentials");
}

#[tokio::test]
async fn test_role_grants_require_existing_user() {
    let (service, _users, roles) = fresh_service();

    assert!(service.make_admin("nobody@x.com").await.is_err());

    let user = service
        .register("a@x.com", "Ada", "Lovelace", "Passw0rd!")
        .await
        .unwrap();
    service.make_admin("a@x.com").await.unwrap();
    service.make_super_admin("a@x.com").await.unwrap();

    let held = roles.roles_for_user(user.id).await.unwrap();
    assert_eq!(held, vec![Role::User, Role::Admin, Role::SuperAdmin]);
}
