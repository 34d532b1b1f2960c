//! Mock implementation of EmployeeRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::employee::Employee;
use crate::errors::DomainError;

use super::trait_::EmployeeRepository;

/// In-memory employee repository for testing
pub struct MockEmployeeRepository {
    employees: Arc<RwLock<HashMap<Uuid, Employee>>>,
}

impl MockEmployeeRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            employees: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeRepository for MockEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, DomainError> {
        let employees = self.employees.read().await;
        let mut all: Vec<Employee> = employees.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, DomainError> {
        let employees = self.employees.read().await;
        Ok(employees.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError> {
        let employees = self.employees.read().await;
        Ok(employees.values().find(|e| e.email == email).cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Employee>, DomainError> {
        let employees = self.employees.read().await;
        Ok(employees.values().find(|e| e.employee_code == code).cloned())
    }

    async fn create(&self, employee: Employee) -> Result<Employee, DomainError> {
        let mut employees = self.employees.write().await;
        employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn update(&self, employee: Employee) -> Result<Employee, DomainError> {
        let mut employees = self.employees.write().await;

        if !employees.contains_key(&employee.id) {
            return Err(DomainError::not_found("Employee"));
        }

        employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut employees = self.employees.write().await;
        Ok(employees.remove(&id).is_some())
    }
}
