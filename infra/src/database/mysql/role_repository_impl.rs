//! MySQL implementation of the RoleRepository trait.
//!
//! Roles live in a small reference table keyed by their fixed name;
//! memberships are a join table between users and role names.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sd_core::domain::entities::role::Role;
use sd_core::errors::DomainError;
use sd_core::repositories::RoleRepository;

/// MySQL implementation of RoleRepository
pub struct MySqlRoleRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRoleRepository {
    /// Create a new MySQL role repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for MySqlRoleRepository {
    async fn exists(&self, role: Role) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS cnt FROM roles WHERE name = ?")
            .bind(role.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        let count: i64 = row
            .try_get("cnt")
            .map_err(|e| DomainError::database(format!("Failed to get count: {}", e)))?;
        Ok(count > 0)
    }

    async fn create(&self, role: Role) -> Result<(), DomainError> {
        // INSERT IGNORE keeps concurrent seeding idempotent
        sqlx::query("INSERT IGNORE INTO roles (name) VALUES (?)")
            .bind(role.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to create role: {}", e)))?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Role>, DomainError> {
        let rows = sqlx::query("SELECT name FROM roles")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        let mut roles = Vec::with_capacity(rows.len());
        for row in rows {
            let name: String = row
                .try_get("name")
                .map_err(|e| DomainError::database(format!("Failed to get name: {}", e)))?;
            if let Some(role) = Role::parse(&name) {
                roles.push(role);
            }
        }
        Ok(roles)
    }

    async fn assign_to_user(&self, user_id: Uuid, role: Role) -> Result<(), DomainError> {
        sqlx::query("INSERT IGNORE INTO user_roles (user_id, role_name) VALUES (?, ?)")
            .bind(user_id.to_string())
            .bind(role.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to assign role: {}", e)))?;
        Ok(())
    }

    async fn roles_for_user(&self, user_id: Uuid) -> Result<Vec<Role>, DomainError> {
        let rows = sqlx::query("SELECT role_name FROM user_roles WHERE user_id = ?")
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        let mut roles = Vec::with_capacity(rows.len());
        for row in rows {
            let name: String = row
                .try_get("role_name")
                .map_err(|e| DomainError::database(format!("Failed to get role_name: {}", e)))?;
            if let Some(role) = Role::parse(&name) {
                roles.push(role);
            }
        }
        Ok(roles)
    }
}
