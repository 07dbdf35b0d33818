//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `route53_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use route53_audit::initialization::init_logger_with;
use route53_audit::{run_audit, Config, Opt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::from(Opt::parse());

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the audit using the library
    match run_audit(config).await {
        Ok(report) => {
            // Print user-friendly summary
            println!(
                "✅ Audited {} record{} ({} resolvable, {} unresolvable) in {:.1}s",
                report.total_records,
                if report.total_records == 1 { "" } else { "s" },
                report.resolvable,
                report.unresolvable,
                report.elapsed_seconds
            );
            if let (Some(path), Some(rows)) = (&report.csv_path, report.csv_rows) {
                println!("CSV report with {} row(s) saved in {}", rows, path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("route53_audit error: {:#}", e);
            process::exit(1);
        }
    }
}
