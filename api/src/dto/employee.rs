use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use sd_core::domain::entities::employee::{Employee, EmployeeDraft};

/// Payload for creating or fully replacing an employee record
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmployeeRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 32))]
    pub employee_code: String,

    #[validate(email)]
    pub email: String,

    pub date_of_birth: NaiveDate,

    #[validate(length(min = 1, max = 100))]
    pub designation: String,

    pub salary: i64,

    pub joining_date: NaiveDate,
}

impl EmployeeRequest {
    /// Convert the request into the domain draft
    pub fn into_draft(self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name,
            employee_code: self.employee_code,
            email: self.email,
            date_of_birth: self.date_of_birth,
            designation: self.designation,
            salary: self.salary,
            joining_date: self.joining_date,
        }
    }
}

/// Employee record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub name: String,
    pub employee_code: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub designation: String,
    pub salary: i64,
    pub joining_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            employee_code: employee.employee_code,
            email: employee.email,
            date_of_birth: employee.date_of_birth,
            designation: employee.designation,
            salary: employee.salary,
            joining_date: employee.joining_date,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

/// Query parameters for the point-lookup search endpoint
///
/// Parameter names match the public API contract, not Rust naming.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeSearchQuery {
    #[serde(rename = "emailID", default)]
    pub email_id: Option<String>,

    #[serde(rename = "empCode", default)]
    pub emp_code: Option<String>,
}
