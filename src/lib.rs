//! route53_audit library: Route53 DNS hygiene auditing
//!
//! This library audits the A and CNAME records of an AWS Route53 hosted zone:
//! it follows each record's CNAME chain through the zone, resolves the
//! terminal name against external DNS, and classifies every record as
//! externally resolvable, not resolvable, or sitting on a broken chain.
//!
//! # Example
//!
//! ```no_run
//! use route53_audit::{run_audit, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     zone: "example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_audit(config).await?;
//! println!("Audited {} records: {} resolvable, {} unresolvable",
//!          report.total_records, report.resolvable, report.unresolvable);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime and ambient AWS credentials (the
//! default provider chain, optionally narrowed to a named profile).

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod filter;
pub mod initialization;
mod models;
pub mod report;
pub mod resolve;
mod route53;

// Re-export public API
pub use config::{Config, CsvScope, LogFormat, LogLevel, Opt};
pub use error_handling::{AuditError, InitializationError};
pub use models::{RecordKind, ResolutionResult, ResolutionStatus, ZoneRecord};
pub use run::{run_audit, AuditReport};

// Internal run module (contains the audit pipeline)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{debug, info};

    use crate::config::Config;
    use crate::filter::{apply_filters, compile_ignore_patterns};
    use crate::initialization::init_resolver;
    use crate::report::{print_record, print_summary, write_csv};
    use crate::resolve::{resolve_record, ZoneIndex};
    use crate::route53::{build_client, find_zone_id, list_zone_records};

    /// Results of a completed zone audit.
    ///
    /// Contains summary statistics and metadata about the audit run.
    #[derive(Debug, Clone)]
    pub struct AuditReport {
        /// Total number of records audited
        pub total_records: usize,
        /// Number of records that resolved externally
        pub resolvable: usize,
        /// Number of records that did not (including broken chains)
        pub unresolvable: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
        /// Path the CSV report was written to, when one was requested
        pub csv_path: Option<PathBuf>,
        /// Number of CSV data rows written, when a report was requested
        pub csv_rows: Option<usize>,
    }

    /// Runs a zone audit with the provided configuration.
    ///
    /// This is the main entry point for the library. It locates the hosted
    /// zone, lists its A and CNAME records, applies the ignore patterns and
    /// limit, then resolves and classifies each remaining record in listing
    /// order. Per-record verdicts stream to the console unless silenced;
    /// the summary always prints; the CSV report is written last.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the audit (zone, profile, filters, output)
    ///
    /// # Returns
    ///
    /// Returns an `AuditReport` containing summary statistics, or an error
    /// if the audit failed to complete.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - An ignore pattern is not a valid regular expression
    /// - The DNS resolver cannot be initialized
    /// - The hosted zone cannot be found or its records cannot be listed
    /// - The CSV report cannot be written
    ///
    /// Per-record resolution failures are not errors; they surface as
    /// classified results.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use route53_audit::{run_audit, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     zone: "example.com".to_string(),
    ///     ..Default::default()
    /// };
    /// let report = run_audit(config).await?;
    /// println!("Audited {} records", report.total_records);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_audit(config: Config) -> Result<AuditReport> {
        let start_time = Instant::now();

        // A bad pattern must fail before any AWS or DNS work happens
        let patterns = compile_ignore_patterns(&config.ignore)?;

        let resolver =
            init_resolver(config.resolver).context("Failed to initialize DNS resolver")?;

        let client = build_client(config.profile.as_deref()).await;

        let zone_id = find_zone_id(&client, &config.zone, config.private).await?;
        info!("🔍 Auditing hosted zone {} (id {})", config.zone, zone_id);

        let records = list_zone_records(&client, &zone_id).await?;
        info!("Found {} A/CNAME record set(s)", records.len());

        // Chains may pass through ignored records, so the index covers the
        // full listing while the audit loop covers the filtered one
        let zone = ZoneIndex::new(&records);
        let audited = apply_filters(&records, &patterns, config.limit);
        debug!("Auditing {} record(s) after filtering", audited.len());

        let mut results = Vec::with_capacity(audited.len());
        for record in &audited {
            let result = resolve_record(record, &zone, resolver.as_ref()).await;
            if !config.silent {
                print_record(&result);
            }
            results.push(result);
        }

        print_summary(&results);

        let csv_rows = match &config.csv {
            Some(path) => {
                let rows = write_csv(path, &results, config.csv_scope)?;
                info!("📄 Wrote {} row(s) to {}", rows, path.display());
                Some(rows)
            }
            None => None,
        };

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        let resolvable = results.iter().filter(|r| r.is_resolvable()).count();

        Ok(AuditReport {
            total_records: results.len(),
            resolvable,
            unresolvable: results.len() - resolvable,
            elapsed_seconds,
            csv_path: config.csv.clone(),
            csv_rows,
        })
    }
}
