//! The employee record: the only entity in the system.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::id::EmployeeId;

/// An employee record.
///
/// Records are immutable after creation: there is no update or delete
/// operation anywhere in the system, and every field is read-only behind an
/// accessor. `department` and `role` are open strings on purpose: the
/// enumerated sets in [`crate::catalog`] are a data-entry convention, and the
/// reporting layer must let unexpected department values flow through as
/// their own groups rather than normalizing them.
///
/// Construction performs no field validation: a value with an empty `name`,
/// `department`, or `role` models a malformed stored row, and the reporting
/// layer rejects it (naming this record's id) at the point of consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    department: String,
    role: String,
    salary: f64,
    age: i64,
    joining_date: NaiveDate,
    created_at: DateTime<Utc>,
}

impl Employee {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        department: impl Into<String>,
        role: impl Into<String>,
        salary: f64,
        age: i64,
        joining_date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            role: role.into(),
            salary,
            age,
            joining_date,
            created_at,
        }
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn joining_date(&self) -> NaiveDate {
        self.joining_date
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
