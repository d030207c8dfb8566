//! Database schema definitions

/// SQL to create the departments table
pub const CREATE_DEPARTMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS departments (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    location TEXT
)
"#;

/// SQL to create the employees table
///
/// `department_id` is an informal reference to departments.id; no FOREIGN KEY
/// clause is declared.
pub const CREATE_EMPLOYEES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    department_id INTEGER,
    salary REAL
)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_DEPARTMENTS_TABLE, CREATE_EMPLOYEES_TABLE]
}
