use std::path::{Path, PathBuf};

/// What a failed store build means for the run as a whole.
///
/// The labs treat the database as best-effort, so that is the default;
/// `Fatal` makes the run fail loudly instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreFailure {
    #[default]
    BestEffort,
    Fatal,
}

/// Where the build writes its artifacts.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Path of the SQLite store file
    pub database: PathBuf,
    /// Directory the CSV exports are written into
    pub out_dir: PathBuf,
    /// Policy for store-layer failures
    pub store_failure: StoreFailure,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("company.db"),
            out_dir: PathBuf::from("."),
            store_failure: StoreFailure::default(),
        }
    }
}

impl BuildConfig {
    pub fn employees_csv_path(&self) -> PathBuf {
        self.out_dir.join("employees.csv")
    }

    pub fn departments_csv_path(&self) -> PathBuf {
        self.out_dir.join("departments.csv")
    }
}

pub fn ensure_parent_dir(path: &Path) -> crate::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
