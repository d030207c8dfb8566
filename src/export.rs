//! CSV export of the sample records
//!
//! The export column names differ from the store's (`employee_id` instead of
//! `id`, `department_name` instead of `name`); the row structs below carry
//! the renames so the files still derive from the canonical records.

use std::path::Path;

use serde::Serialize;

use crate::Result;
use crate::record::{Department, Employee};

#[derive(Serialize)]
struct EmployeeRow<'a> {
    employee_id: i64,
    name: &'a str,
    department_id: i64,
    salary: f64,
}

impl<'a> From<&'a Employee> for EmployeeRow<'a> {
    fn from(e: &'a Employee) -> Self {
        Self {
            employee_id: e.id,
            name: &e.name,
            department_id: e.department_id,
            salary: e.salary,
        }
    }
}

#[derive(Serialize)]
struct DepartmentRow<'a> {
    department_id: i64,
    department_name: &'a str,
    location: &'a str,
}

impl<'a> From<&'a Department> for DepartmentRow<'a> {
    fn from(d: &'a Department) -> Self {
        Self {
            department_id: d.id,
            department_name: &d.name,
            location: &d.location,
        }
    }
}

/// Write `employees.csv`: header row plus one row per employee, no index column.
pub fn write_employees(path: &Path, employees: &[Employee]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for employee in employees {
        writer.serialize(EmployeeRow::from(employee))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `departments.csv`: header row plus one row per department.
pub fn write_departments(path: &Path, departments: &[Department]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for department in departments {
        writer.serialize(DepartmentRow::from(department))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn test_employees_csv_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");

        write_employees(&path, &dataset::employees()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "employee_id,name,department_id,salary"
        );
        assert_eq!(lines.count(), 7);
    }

    #[test]
    fn test_departments_csv_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("departments.csv");

        write_departments(&path, &dataset::departments()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), "department_id,department_name,location");
        assert_eq!(lines.count(), 4);
    }

    #[test]
    fn test_employee_row_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");

        write_employees(&path, &dataset::employees()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let frank = contents
            .lines()
            .find(|l| l.contains("Frank"))
            .expect("Frank missing from export");
        assert_eq!(frank, "106,Frank,1,120000.0");
    }
}
