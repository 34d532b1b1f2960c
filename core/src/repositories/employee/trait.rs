//! Employee repository trait for the CRUD resource store.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::employee::Employee;
use crate::errors::DomainError;

/// Repository trait for Employee entity persistence operations
///
/// Concurrent writes to the same employee are not coordinated here;
/// updates race at the storage layer with last-write-wins semantics.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// List all employees
    async fn list(&self) -> Result<Vec<Employee>, DomainError>;

    /// Find an employee by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, DomainError>;

    /// Find an employee by email
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError>;

    /// Find an employee by employee code
    async fn find_by_code(&self, code: &str) -> Result<Option<Employee>, DomainError>;

    /// Persist a new employee
    async fn create(&self, employee: Employee) -> Result<Employee, DomainError>;

    /// Replace an existing employee record
    ///
    /// # Returns
    /// * `Ok(Employee)` - The updated record
    /// * `Err(DomainError::NotFound)` - No record with that id
    async fn update(&self, employee: Employee) -> Result<Employee, DomainError>;

    /// Hard-delete an employee by id
    ///
    /// # Returns
    /// * `Ok(true)` - Record deleted
    /// * `Ok(false)` - Record not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
