//! Company Fixtures CLI - seeds the course lab database and CSV files

use clap::Parser;
use company_fixtures::{BuildConfig, StoreFailure, build};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "company-fixtures")]
#[command(version)]
#[command(about = "Seeds the company sample database and CSV exports for the course labs")]
#[command(long_about = r#"
Creates the deterministic sample data the lab exercises assume:
  • company.db with 'departments' and 'employees' tables
  • employees.csv and departments.csv

Re-running replaces all rows and rewrites both files, so the fixtures can be
reset at any point during a course.

Example usage:
  company-fixtures
  company-fixtures --database labs/company.db --out-dir labs
"#)]
struct Cli {
    /// Path of the SQLite store file
    #[arg(short, long, default_value = "company.db")]
    database: PathBuf,

    /// Directory the CSV exports are written into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Treat a failed database build as fatal instead of best-effort
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = BuildConfig {
        database: cli.database,
        out_dir: cli.out_dir,
        store_failure: if cli.strict {
            StoreFailure::Fatal
        } else {
            StoreFailure::BestEffort
        },
    };

    println!("🏗️  Building course fixtures");
    println!("🗄️  Database: {:?}", config.database);
    println!("📂 Output dir: {:?}", config.out_dir);

    let report = build(&config)?;

    if let Some(err) = &report.store_error {
        println!("⚠️  Database build failed (continuing without it): {}", err);
    } else {
        println!(
            "🗄️  Database seeded: {} departments, {} employees",
            report.departments_seeded, report.employees_seeded
        );
    }
    println!("📄 {} created", report.employees_csv.display());
    println!("📄 {} created", report.departments_csv.display());

    println!("\n✅ Fixture build complete!");
    Ok(())
}
