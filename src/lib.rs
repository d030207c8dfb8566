//! # Company Fixtures - sample database builder for the course labs
//!
//! Produces the deterministic local state the lab exercises assume:
//! - `company.db`, a SQLite store with `departments` and `employees` tables
//! - `employees.csv` and `departments.csv`, flat exports of the same records
//!
//! Every run reseeds the store (delete-then-insert) and rewrites both CSV
//! files, so the tool is safe to re-run at any point during a course.

pub mod builder;
pub mod config;
pub mod dataset;
pub mod export;
pub mod record;
pub mod storage;

// Re-exports for convenient access
pub use builder::{BuildReport, build};
pub use config::{BuildConfig, StoreFailure};
pub use record::{Department, Employee};
pub use storage::CompanyStore;

/// Result type alias for fixture operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for fixture operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Export error: {0}")]
    Export(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
