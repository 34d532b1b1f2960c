//! Employee entity, the single CRUD resource of the system.
//!
//! Employees are owned independently of identities; there is no
//! relationship between an employee record and a login account.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier, generated at creation, immutable
    pub id: Uuid,

    /// Employee's full name
    pub name: String,

    /// Organization-assigned employee code
    pub employee_code: String,

    /// Employee's email address
    pub email: String,

    /// Date of birth
    pub date_of_birth: NaiveDate,

    /// Job designation/title
    pub designation: String,

    /// Monthly salary, non-negative
    pub salary: i64,

    /// Date of joining the organization
    pub joining_date: NaiveDate,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Mutable field set used for creating and replacing an employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub employee_code: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub designation: String,
    pub salary: i64,
    pub joining_date: NaiveDate,
}

impl Employee {
    /// Creates a new Employee from a draft, stamping audit timestamps
    pub fn from_draft(draft: EmployeeDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            employee_code: draft.employee_code,
            email: draft.email,
            date_of_birth: draft.date_of_birth,
            designation: draft.designation,
            salary: draft.salary,
            joining_date: draft.joining_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces all mutable fields in place, bumping `updated_at`
    ///
    /// The id and `created_at` are immutable; last writer wins.
    pub fn apply(&mut self, draft: EmployeeDraft) {
        self.name = draft.name;
        self.employee_code = draft.employee_code;
        self.email = draft.email;
        self.date_of_birth = draft.date_of_birth;
        self.designation = draft.designation;
        self.salary = draft.salary;
        self.joining_date = draft.joining_date;
        self.updated_at = Utc::now();
    }
}
