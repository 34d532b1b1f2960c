//! Employee CRUD service implementation

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::entities::employee::{Employee, EmployeeDraft};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::EmployeeRepository;

/// Service for employee record operations
///
/// No algorithmic content beyond existence checks and field validation;
/// concurrent updates to the same record race last-write-wins.
pub struct EmployeeService<E>
where
    E: EmployeeRepository,
{
    repository: Arc<E>,
}

impl<E> EmployeeService<E>
where
    E: EmployeeRepository,
{
    /// Create a new employee service
    pub fn new(repository: Arc<E>) -> Self {
        Self { repository }
    }

    /// List all employees
    pub async fn list(&self) -> DomainResult<Vec<Employee>> {
        self.repository.list().await
    }

    /// Get an employee by id
    pub async fn get(&self, id: Uuid) -> DomainResult<Employee> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Employee"))
    }

    /// Point lookup by email
    pub async fn find_by_email(&self, email: &str) -> DomainResult<Employee> {
        if email.trim().is_empty() {
            return Err(DomainError::ValidationErr(ValidationError::RequiredField {
                field: "emailID".to_string(),
            }));
        }
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found("Employee"))
    }

    /// Point lookup by employee code
    pub async fn find_by_code(&self, code: &str) -> DomainResult<Employee> {
        if code.trim().is_empty() {
            return Err(DomainError::ValidationErr(ValidationError::RequiredField {
                field: "empCode".to_string(),
            }));
        }
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| DomainError::not_found("Employee"))
    }

    /// Create a new employee record
    ///
    /// # Returns
    ///
    /// * `Ok(Employee)` - The created record including its generated id
    /// * `Err(DomainError)` - Validation failed or persistence error
    pub async fn create(&self, draft: EmployeeDraft) -> DomainResult<Employee> {
        validate_draft(&draft)?;

        let employee = self.repository.create(Employee::from_draft(draft)).await?;
        info!(employee_id = %employee.id, "Created employee");
        Ok(employee)
    }

    /// Replace all mutable fields of an existing record
    ///
    /// Last writer wins; there is no optimistic-concurrency check.
    pub async fn update(&self, id: Uuid, draft: EmployeeDraft) -> DomainResult<Employee> {
        validate_draft(&draft)?;

        let mut employee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Employee"))?;

        employee.apply(draft);
        let employee = self.repository.update(employee).await?;
        info!(employee_id = %employee.id, "Updated employee");
        Ok(employee)
    }

    /// Hard-delete an employee record
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found("Employee"));
        }
        info!(employee_id = %id, "Deleted employee");
        Ok(())
    }
}

/// Required-field and range validation for create/update payloads
fn validate_draft(draft: &EmployeeDraft) -> DomainResult<()> {
    for (field, value) in [
        ("name", &draft.name),
        ("employee_code", &draft.employee_code),
        ("email", &draft.email),
        ("designation", &draft.designation),
    ] {
        if value.trim().is_empty() {
            return Err(DomainError::ValidationErr(ValidationError::RequiredField {
                field: field.to_string(),
            }));
        }
    }

    if !sd_shared::validation::is_valid_email(&draft.email) {
        return Err(DomainError::ValidationErr(ValidationError::InvalidEmail));
    }

    if draft.salary < 0 {
        return Err(DomainError::ValidationErr(ValidationError::OutOfRange {
            field: "salary".to_string(),
            min: "0".to_string(),
        }));
    }

    Ok(())
}
