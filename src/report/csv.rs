//! CSV export functionality.
//!
//! Exports audit results to CSV format, one row per audited record.

use std::path::Path;

use csv::Writer;

use crate::config::CsvScope;
use crate::error_handling::AuditError;
use crate::models::ResolutionResult;

fn csv_error(path: &Path, source: csv::Error) -> AuditError {
    AuditError::CsvWrite {
        path: path.to_path_buf(),
        source,
    }
}

/// Writes audit results to a CSV file.
///
/// Rows are filtered by `scope` and sorted by source name so repeated runs
/// of the same zone diff cleanly. The `all_ips` column carries the
/// `", "`-joined address list, or `No DNS resolution` for records without
/// one.
///
/// # Arguments
///
/// * `path` - Output file path
/// * `results` - Audit results in processing order
/// * `scope` - Which results to include (all, resolved, unresolved)
///
/// # Returns
///
/// The number of data rows written, excluding the header.
///
/// # Errors
///
/// Returns `AuditError::CsvWrite` when the file cannot be created or a row
/// cannot be written.
pub fn write_csv(
    path: &Path,
    results: &[ResolutionResult],
    scope: CsvScope,
) -> Result<usize, AuditError> {
    let mut rows: Vec<&ResolutionResult> = results
        .iter()
        .filter(|result| match scope {
            CsvScope::All => true,
            CsvScope::Resolved => result.is_resolvable(),
            CsvScope::Unresolved => !result.is_resolvable(),
        })
        .collect();
    rows.sort_by(|a, b| a.source.cmp(&b.source));

    let mut writer = Writer::from_path(path).map_err(|e| csv_error(path, e))?;
    writer
        .write_record(["source", "final_domain", "status", "all_ips"])
        .map_err(|e| csv_error(path, e))?;

    for result in &rows {
        writer
            .write_record(&[
                result.source.clone(),
                result.final_domain.clone(),
                result.status.as_str().to_string(),
                result.ips_display(),
            ])
            .map_err(|e| csv_error(path, e))?;
    }

    writer.flush().map_err(|e| csv_error(path, e.into()))?;

    Ok(rows.len())
}
