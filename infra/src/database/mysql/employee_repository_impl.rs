//! MySQL implementation of the EmployeeRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sd_core::domain::entities::employee::Employee;
use sd_core::errors::DomainError;
use sd_core::repositories::EmployeeRepository;

const EMPLOYEE_COLUMNS: &str = "id, name, employee_code, email, date_of_birth, \
     designation, salary, joining_date, created_at, updated_at";

/// MySQL implementation of EmployeeRepository
pub struct MySqlEmployeeRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    /// Create a new MySQL employee repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Employee entity
    fn row_to_employee(row: &sqlx::mysql::MySqlRow) -> Result<Employee, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;

        Ok(Employee {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::database(format!("Failed to get name: {}", e)))?,
            employee_code: row
                .try_get("employee_code")
                .map_err(|e| DomainError::database(format!("Failed to get employee_code: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::database(format!("Failed to get email: {}", e)))?,
            date_of_birth: row
                .try_get::<NaiveDate, _>("date_of_birth")
                .map_err(|e| DomainError::database(format!("Failed to get date_of_birth: {}", e)))?,
            designation: row
                .try_get("designation")
                .map_err(|e| DomainError::database(format!("Failed to get designation: {}", e)))?,
            salary: row
                .try_get::<i64, _>("salary")
                .map_err(|e| DomainError::database(format!("Failed to get salary: {}", e)))?,
            joining_date: row
                .try_get::<NaiveDate, _>("joining_date")
                .map_err(|e| DomainError::database(format!("Failed to get joining_date: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::database(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    async fn fetch_one_by(
        &self,
        column: &str,
        value: &str,
    ) -> Result<Option<Employee>, DomainError> {
        // column comes from a fixed set of callers, never user input
        let query = format!(
            "SELECT {} FROM employees WHERE {} = ? LIMIT 1",
            EMPLOYEE_COLUMNS, column
        );

        let result = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_employee(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl EmployeeRepository for MySqlEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, DomainError> {
        let query = format!(
            "SELECT {} FROM employees ORDER BY created_at, id",
            EMPLOYEE_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_employee).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, DomainError> {
        self.fetch_one_by("id", &id.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError> {
        self.fetch_one_by("email", email).await
    }

    async fn find_by_code(&self, employee_code: &str) -> Result<Option<Employee>, DomainError> {
        self.fetch_one_by("employee_code", employee_code).await
    }

    async fn create(&self, employee: Employee) -> Result<Employee, DomainError> {
        let query = r#"
            INSERT INTO employees (id, name, employee_code, email, date_of_birth,
                                   designation, salary, joining_date,
                                   created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(employee.id.to_string())
            .bind(&employee.name)
            .bind(&employee.employee_code)
            .bind(&employee.email)
            .bind(employee.date_of_birth)
            .bind(&employee.designation)
            .bind(employee.salary)
            .bind(employee.joining_date)
            .bind(employee.created_at)
            .bind(employee.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to create employee: {}", e)))?;

        Ok(employee)
    }

    async fn update(&self, employee: Employee) -> Result<Employee, DomainError> {
        let query = r#"
            UPDATE employees
            SET name = ?, employee_code = ?, email = ?, date_of_birth = ?,
                designation = ?, salary = ?, joining_date = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&employee.name)
            .bind(&employee.employee_code)
            .bind(&employee.email)
            .bind(employee.date_of_birth)
            .bind(&employee.designation)
            .bind(employee.salary)
            .bind(employee.joining_date)
            .bind(employee.updated_at)
            .bind(employee.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update employee: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Employee"));
        }

        Ok(employee)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete employee: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
