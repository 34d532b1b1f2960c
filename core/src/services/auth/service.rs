//! Main authentication service implementation

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::role::Role;
use crate::domain::entities::token::IssuedToken;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{RoleRepository, UserRepository};
use crate::services::token::TokenService;

use super::password::{hash_password, verify_password, PasswordPolicy};

/// Result of the idempotent role-seeding operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedRolesOutcome {
    /// All fixed roles already existed; nothing was created
    AlreadyDone,
    /// The missing subset was created
    Seeded { created: Vec<Role> },
}

impl SeedRolesOutcome {
    /// Human-readable status message surfaced by the seed endpoint
    pub fn message(&self) -> &'static str {
        match self {
            SeedRolesOutcome::AlreadyDone => "Roles seeding is already done",
            SeedRolesOutcome::Seeded { .. } => "Roles seeding succeeded",
        }
    }
}

/// Authentication service for registration, login, and role management
pub struct AuthService<U, R>
where
    U: UserRepository,
    R: RoleRepository,
{
    /// Credential store for identities
    user_repository: Arc<U>,
    /// Role store and membership
    role_repository: Arc<R>,
    /// Token issuer for successful logins
    token_service: Arc<TokenService>,
    /// Registration password policy
    password_policy: PasswordPolicy,
}

impl<U, R> AuthService<U, R>
where
    U: UserRepository,
    R: RoleRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for identity persistence
    /// * `role_repository` - Repository for roles and memberships
    /// * `token_service` - Service for JWT issuance
    pub fn new(
        user_repository: Arc<U>,
        role_repository: Arc<R>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repository,
            role_repository,
            token_service,
            password_policy: PasswordPolicy,
        }
    }

    /// Ensure the three fixed roles exist
    ///
    /// Idempotent: when every role already exists this is a pure no-op
    /// reporting [`SeedRolesOutcome::AlreadyDone`]; otherwise only the
    /// missing subset is created.
    pub async fn seed_roles(&self) -> DomainResult<SeedRolesOutcome> {
        let mut missing = Vec::new();
        for role in Role::ALL {
            if !self.role_repository.exists(role).await? {
                missing.push(role);
            }
        }

        if missing.is_empty() {
            return Ok(SeedRolesOutcome::AlreadyDone);
        }

        for role in &missing {
            self.role_repository.create(*role).await?;
        }

        info!(created = ?missing, "Seeded missing roles");
        Ok(SeedRolesOutcome::Seeded { created: missing })
    }

    /// Register a new identity
    ///
    /// Validates the email format and the password policy, rejects
    /// duplicate emails, and always grants the `USER` role to the new
    /// identity. There is no self-service path to any other role.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The created identity
    /// * `Err(DomainError)` - Validation, policy, or duplicate failure
    pub async fn register(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        password: &str,
    ) -> DomainResult<User> {
        if !sd_shared::validation::is_valid_email(email) {
            return Err(DomainError::ValidationErr(ValidationError::InvalidEmail));
        }

        if self.user_repository.exists_by_email(email).await? {
            return Err(DomainError::Auth(AuthError::EmailTaken {
                email: email.to_string(),
            }));
        }

        self.password_policy.enforce(password)?;

        let password_hash = hash_password(password)?;
        let user = User::new(
            email.to_string(),
            password_hash,
            first_name.to_string(),
            last_name.to_string(),
        );
        let user = self.user_repository.create(user).await?;

        self.role_repository
            .assign_to_user(user.id, Role::User)
            .await?;

        info!(user_id = %user.id, "Registered new user");
        Ok(user)
    }

    /// Verify credentials and issue a bearer token
    ///
    /// Unknown email and wrong password take the same path out: one
    /// undifferentiated `InvalidCredentials`, identical response and
    /// identical log line, so the caller cannot enumerate accounts.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<IssuedToken> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) if verify_password(password, &user.password_hash) => user,
            _ => {
                warn!("Login rejected: invalid credentials");
                return Err(DomainError::Auth(AuthError::InvalidCredentials));
            }
        };

        let roles = self.role_repository.roles_for_user(user.id).await?;
        let token = self.token_service.issue(user.id, user.username(), &roles)?;

        info!(user_id = %user.id, "Login succeeded");
        Ok(token)
    }

    /// Grant the `ADMIN` role to an existing identity
    ///
    /// Declared on the service contract; no route exposes it.
    pub async fn make_admin(&self, email: &str) -> DomainResult<()> {
        self.grant_role(email, Role::Admin).await
    }

    /// Grant the `SUPER_ADMIN` role to an existing identity
    ///
    /// Declared on the service contract; no route exposes it.
    pub async fn make_super_admin(&self, email: &str) -> DomainResult<()> {
        self.grant_role(email, Role::SuperAdmin).await
    }

    async fn grant_role(&self, email: &str, role: Role) -> DomainResult<()> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        self.role_repository.assign_to_user(user.id, role).await?;
        info!(user_id = %user.id, role = %role, "Granted role");
        Ok(())
    }
}
