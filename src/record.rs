//! Canonical record types
//!
//! Single source of truth for the sample data: both the SQLite write and the
//! CSV export derive from these structs, so the two artifacts cannot drift.

use serde::{Deserialize, Serialize};

/// A department in the sample company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Primary key
    pub id: i64,
    /// Department name
    pub name: String,
    /// Building the department sits in
    pub location: String,
}

impl Department {
    pub fn new(id: i64, name: &str, location: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            location: location.to_string(),
        }
    }
}

/// An employee in the sample company.
///
/// `department_id` refers to a [`Department::id`] by convention only; the
/// schema does not enforce a foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Primary key
    pub id: i64,
    /// Employee name
    pub name: String,
    /// Department the employee belongs to
    pub department_id: i64,
    /// Annual salary
    pub salary: f64,
}

impl Employee {
    pub fn new(id: i64, name: &str, department_id: i64, salary: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            department_id,
            salary,
        }
    }
}
