//! Build orchestration
//!
//! One linear pass: seed the SQLite store, then write the CSV exports. Both
//! steps read from the same canonical dataset. The store step is governed by
//! [`StoreFailure`]; export failures always propagate.

use std::path::PathBuf;

use tracing::{error, info};

use crate::config::{BuildConfig, StoreFailure, ensure_parent_dir};
use crate::record::{Department, Employee};
use crate::storage::CompanyStore;
use crate::{Error, Result, dataset, export};

/// What a build run produced.
#[derive(Debug)]
pub struct BuildReport {
    /// Department rows written to the store (0 if the store step failed)
    pub departments_seeded: usize,
    /// Employee rows written to the store (0 if the store step failed)
    pub employees_seeded: usize,
    /// The store-layer error, when the policy let the run continue
    pub store_error: Option<Error>,
    /// Path of the written employees export
    pub employees_csv: PathBuf,
    /// Path of the written departments export
    pub departments_csv: PathBuf,
}

impl BuildReport {
    /// Whether the store was seeded successfully
    pub fn store_ok(&self) -> bool {
        self.store_error.is_none()
    }
}

/// Run the full fixture build.
pub fn build(config: &BuildConfig) -> Result<BuildReport> {
    let departments = dataset::departments();
    let employees = dataset::employees();

    let mut report = BuildReport {
        departments_seeded: 0,
        employees_seeded: 0,
        store_error: None,
        employees_csv: config.employees_csv_path(),
        departments_csv: config.departments_csv_path(),
    };

    match seed_store(config, &departments, &employees) {
        Ok(()) => {
            report.departments_seeded = departments.len();
            report.employees_seeded = employees.len();
        }
        Err(e) => match config.store_failure {
            StoreFailure::Fatal => return Err(e),
            StoreFailure::BestEffort => {
                error!("database build failed: {e}");
                report.store_error = Some(e);
            }
        },
    }

    // The exports derive from the same records the store was seeded with,
    // and are written even when a best-effort store build failed.
    export::write_employees(&report.employees_csv, &employees)?;
    info!("wrote {}", report.employees_csv.display());
    export::write_departments(&report.departments_csv, &departments)?;
    info!("wrote {}", report.departments_csv.display());

    Ok(report)
}

/// Reseed the store: ensure schema, purge both tables, bulk-insert the
/// dataset, commit. An uncommitted transaction is discarded when the
/// connection drops, so a failure part-way leaves the prior contents intact.
fn seed_store(
    config: &BuildConfig,
    departments: &[Department],
    employees: &[Employee],
) -> Result<()> {
    ensure_parent_dir(&config.database)?;
    let mut store = CompanyStore::open(&config.database)?;
    info!("database created and connected at {}", config.database.display());

    store.begin_transaction()?;
    store.clear_all()?;

    for department in departments {
        store.insert_department(department)?;
    }
    info!("{} records inserted into 'departments'", departments.len());

    for employee in employees {
        store.insert_employee(employee)?;
    }
    info!("{} records inserted into 'employees'", employees.len());

    store.commit()?;
    info!("data committed");
    Ok(())
}
