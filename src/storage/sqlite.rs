//! SQLite storage implementation

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use super::schema;
use crate::Result;
use crate::record::{Department, Employee};

/// SQLite-backed store for the sample company data
pub struct CompanyStore {
    conn: Connection,
}

impl CompanyStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Department Operations ==========

    /// Insert a department
    pub fn insert_department(&self, department: &Department) -> Result<()> {
        self.conn.execute(
            "INSERT INTO departments (id, name, location) VALUES (?1, ?2, ?3)",
            params![department.id, department.name, department.location],
        )?;
        Ok(())
    }

    /// Get a department by id
    pub fn get_department(&self, id: i64) -> Result<Option<Department>> {
        self.conn
            .query_row(
                "SELECT id, name, location FROM departments WHERE id = ?1",
                [id],
                |row| self.row_to_department(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Get all departments, ordered by id
    pub fn all_departments(&self) -> Result<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, location FROM departments ORDER BY id")?;

        let departments = stmt
            .query_map([], |row| self.row_to_department(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(departments)
    }

    /// Count all departments
    pub fn count_departments(&self) -> Result<usize> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM departments", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn row_to_department(&self, row: &rusqlite::Row) -> rusqlite::Result<Department> {
        Ok(Department {
            id: row.get(0)?,
            name: row.get(1)?,
            location: row.get(2)?,
        })
    }

    // ========== Employee Operations ==========

    /// Insert an employee
    pub fn insert_employee(&self, employee: &Employee) -> Result<()> {
        self.conn.execute(
            "INSERT INTO employees (id, name, department_id, salary) VALUES (?1, ?2, ?3, ?4)",
            params![
                employee.id,
                employee.name,
                employee.department_id,
                employee.salary,
            ],
        )?;
        Ok(())
    }

    /// Get an employee by id
    pub fn get_employee(&self, id: i64) -> Result<Option<Employee>> {
        self.conn
            .query_row(
                "SELECT id, name, department_id, salary FROM employees WHERE id = ?1",
                [id],
                |row| self.row_to_employee(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Get all employees, ordered by id
    pub fn all_employees(&self) -> Result<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, department_id, salary FROM employees ORDER BY id")?;

        let employees = stmt
            .query_map([], |row| self.row_to_employee(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(employees)
    }

    /// Count all employees
    pub fn count_employees(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn row_to_employee(&self, row: &rusqlite::Row) -> rusqlite::Result<Employee> {
        Ok(Employee {
            id: row.get(0)?,
            name: row.get(1)?,
            department_id: row.get(2)?,
            salary: row.get(3)?,
        })
    }

    // ========== Bulk Operations ==========

    /// Begin a transaction for bulk operations
    pub fn begin_transaction(&mut self) -> Result<()> {
        self.conn.execute("BEGIN TRANSACTION", [])?;
        Ok(())
    }

    /// Commit a transaction
    pub fn commit(&mut self) -> Result<()> {
        self.conn.execute("COMMIT", [])?;
        Ok(())
    }

    /// Rollback a transaction
    pub fn rollback(&mut self) -> Result<()> {
        self.conn.execute("ROLLBACK", [])?;
        Ok(())
    }

    /// Delete all rows from both tables (for reseeding)
    pub fn clear_all(&self) -> Result<()> {
        self.conn.execute("DELETE FROM employees", [])?;
        self.conn.execute("DELETE FROM departments", [])?;
        Ok(())
    }

    /// Get store statistics
    pub fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            departments: self.count_departments()?,
            employees: self.count_employees()?,
        })
    }
}

/// Store statistics
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub departments: usize,
    pub employees: usize,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Store contents:")?;
        writeln!(f, "  Departments: {}", self.departments)?;
        write!(f, "  Employees: {}", self.employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_roundtrip() {
        let store = CompanyStore::open_in_memory().unwrap();

        let dept = Department::new(1, "Engineering", "Building A");
        store.insert_department(&dept).unwrap();

        let retrieved = store.get_department(1).unwrap().unwrap();
        assert_eq!(retrieved.name, "Engineering");
        assert_eq!(retrieved.location, "Building A");

        assert!(store.get_department(99).unwrap().is_none());
    }

    #[test]
    fn test_employee_roundtrip() {
        let store = CompanyStore::open_in_memory().unwrap();

        let emp = Employee::new(101, "Alice", 1, 95000.0);
        store.insert_employee(&emp).unwrap();

        let retrieved = store.get_employee(101).unwrap().unwrap();
        assert_eq!(retrieved.name, "Alice");
        assert_eq!(retrieved.department_id, 1);
        assert_eq!(retrieved.salary, 95000.0);
    }

    #[test]
    fn test_duplicate_primary_key_rejected() {
        let store = CompanyStore::open_in_memory().unwrap();

        store
            .insert_department(&Department::new(1, "Engineering", "Building A"))
            .unwrap();
        let dup = store.insert_department(&Department::new(1, "Sales", "Building B"));
        assert!(dup.is_err());
    }

    #[test]
    fn test_clear_all_empties_both_tables() {
        let store = CompanyStore::open_in_memory().unwrap();

        store
            .insert_department(&Department::new(1, "Engineering", "Building A"))
            .unwrap();
        store
            .insert_employee(&Employee::new(101, "Alice", 1, 95000.0))
            .unwrap();

        store.clear_all().unwrap();

        assert_eq!(store.count_departments().unwrap(), 0);
        assert_eq!(store.count_employees().unwrap(), 0);
    }

    #[test]
    fn test_all_employees_ordered_by_id() {
        let store = CompanyStore::open_in_memory().unwrap();

        store
            .insert_employee(&Employee::new(103, "Charlie", 1, 110000.0))
            .unwrap();
        store
            .insert_employee(&Employee::new(101, "Alice", 1, 95000.0))
            .unwrap();

        let ids: Vec<i64> = store.all_employees().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![101, 103]);
    }
}
