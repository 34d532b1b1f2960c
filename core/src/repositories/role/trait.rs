//! Role repository trait for role storage and membership.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::role::Role;
use crate::errors::DomainError;

/// Repository trait for role persistence and user-role membership
///
/// Roles come from the fixed closed set in [`Role`]; the repository only
/// stores which of them have been seeded and who holds them.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Check whether a role has been seeded
    async fn exists(&self, role: Role) -> Result<bool, DomainError>;

    /// Create a role; a no-op error-free path is not required for
    /// duplicates, callers check `exists` first
    async fn create(&self, role: Role) -> Result<(), DomainError>;

    /// List all seeded roles
    async fn list(&self) -> Result<Vec<Role>, DomainError>;

    /// Grant a role to a user
    async fn assign_to_user(&self, user_id: Uuid, role: Role) -> Result<(), DomainError>;

    /// The roles currently held by a user (possibly empty)
    async fn roles_for_user(&self, user_id: Uuid) -> Result<Vec<Role>, DomainError>;
}
