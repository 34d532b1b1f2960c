//! Mock implementation of RoleRepository for testing

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::role::Role;
use crate::errors::DomainError;

use super::trait_::RoleRepository;

/// In-memory role repository for testing
pub struct MockRoleRepository {
    roles: Arc<RwLock<HashSet<Role>>>,
    memberships: Arc<RwLock<HashMap<Uuid, Vec<Role>>>>,
}

impl MockRoleRepository {
    /// Create a new mock repository with no seeded roles
    pub fn new() -> Self {
        Self {
            roles: Arc::new(RwLock::new(HashSet::new())),
            memberships: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock repository with the full fixed role set pre-seeded
    pub fn seeded() -> Self {
        Self {
            roles: Arc::new(RwLock::new(Role::ALL.into_iter().collect())),
            memberships: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockRoleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleRepository for MockRoleRepository {
    async fn exists(&self, role: Role) -> Result<bool, DomainError> {
        let roles = self.roles.read().await;
        Ok(roles.contains(&role))
    }

    async fn create(&self, role: Role) -> Result<(), DomainError> {
        let mut roles = self.roles.write().await;
        roles.insert(role);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Role>, DomainError> {
        let roles = self.roles.read().await;
        // Report in the fixed seeding order
        Ok(Role::ALL
            .into_iter()
            .filter(|r| roles.contains(r))
            .collect())
    }

    async fn assign_to_user(&self, user_id: Uuid, role: Role) -> Result<(), DomainError> {
        let mut memberships = self.memberships.write().await;
        let held = memberships.entry(user_id).or_default();
        if !held.contains(&role) {
            held.push(role);
        }
        Ok(())
    }

    async fn roles_for_user(&self, user_id: Uuid) -> Result<Vec<Role>, DomainError> {
        let memberships = self.memberships.read().await;
        Ok(memberships.get(&user_id).cloned().unwrap_or_default())
    }
}
