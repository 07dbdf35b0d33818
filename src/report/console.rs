//! Console reporting.

use strum::IntoEnumIterator;

use crate::models::{ResolutionResult, ResolutionStatus};

/// Prints the one-line verdict for a single record.
///
/// Called as results arrive so a long audit shows progress; suppressed
/// entirely by `--silent`.
pub fn print_record(result: &ResolutionResult) {
    if result.is_resolvable() {
        println!(
            "✅ {} resolves to {} with IP(s): {}",
            result.source,
            result.final_domain,
            result.ips_display()
        );
    } else {
        println!(
            "❌ {} does NOT resolve to an IP ({})",
            result.source,
            result.reason.as_deref().unwrap_or("unknown reason")
        );
    }
}

/// Prints the closing summary.
///
/// Always printed, silent mode included: per-status counts followed by the
/// unresolved breakdown, or an all-clear line when everything resolved.
pub fn print_summary(results: &[ResolutionResult]) {
    println!();
    println!("📊 Audit summary for {} record(s):", results.len());
    for status in ResolutionStatus::iter() {
        let count = results.iter().filter(|r| r.status == status).count();
        println!("   {}: {}", status, count);
    }
    println!();

    let unresolved: Vec<&ResolutionResult> =
        results.iter().filter(|r| !r.is_resolvable()).collect();
    if unresolved.is_empty() {
        println!("✅ All applicable records resolved to IPs.");
    } else {
        println!("❗ Summary: Unresolved records");
        for result in unresolved {
            println!(
                "  - {} → {} ({})",
                result.source,
                result.final_domain,
                result.reason.as_deref().unwrap_or("unknown reason")
            );
        }
    }
}
