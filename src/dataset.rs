//! The fixed sample dataset
//!
//! These rows are the contract with the lab handouts: exercise answers are
//! written against exactly these values. Change them and every worked
//! solution in the course material goes stale.

use crate::record::{Department, Employee};

/// The four sample departments.
pub fn departments() -> Vec<Department> {
    vec![
        Department::new(1, "Engineering", "Building A"),
        Department::new(2, "Sales", "Building B"),
        Department::new(3, "Human Resources", "Building A"),
        Department::new(4, "Marketing", "Building B"),
    ]
}

/// The seven sample employees.
pub fn employees() -> Vec<Employee> {
    vec![
        Employee::new(101, "Alice", 1, 95000.0),
        Employee::new(102, "Bob", 2, 80000.0),
        Employee::new(103, "Charlie", 1, 110000.0),
        Employee::new(104, "David", 4, 72000.0),
        Employee::new(105, "Eve", 2, 85000.0),
        Employee::new(106, "Frank", 1, 120000.0),
        Employee::new(107, "Grace", 3, 60000.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_counts() {
        assert_eq!(departments().len(), 4);
        assert_eq!(employees().len(), 7);
    }

    #[test]
    fn test_ids_unique() {
        let mut dept_ids: Vec<i64> = departments().iter().map(|d| d.id).collect();
        dept_ids.sort();
        dept_ids.dedup();
        assert_eq!(dept_ids.len(), 4);

        let mut emp_ids: Vec<i64> = employees().iter().map(|e| e.id).collect();
        emp_ids.sort();
        emp_ids.dedup();
        assert_eq!(emp_ids.len(), 7);
    }

    #[test]
    fn test_every_employee_has_a_known_department() {
        let dept_ids: Vec<i64> = departments().iter().map(|d| d.id).collect();
        for employee in employees() {
            assert!(
                dept_ids.contains(&employee.department_id),
                "{} references unknown department {}",
                employee.name,
                employee.department_id
            );
        }
    }
}
