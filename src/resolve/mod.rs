//! Resolution engine.
//!
//! Walks each record's CNAME chain through the zone, resolves the terminal
//! name against external DNS, and classifies the outcome.

mod chain;
mod classify;
mod external;

use log::debug;

use crate::config::MAX_CNAME_CHAIN_DEPTH;
use crate::models::{RecordKind, ResolutionResult, ZoneRecord};

// Re-export public API
pub use chain::{follow_cname_chain, ChainOutcome, ZoneIndex};
pub use classify::{classify_broken, classify_lookup};
pub use external::LookupHost;

/// Resolves and classifies a single zone record.
///
/// A records are resolved under their own name. CNAME records first walk
/// the in-zone chain; a broken walk short-circuits to `ChainBroken` without
/// touching DNS, otherwise the terminal name is looked up externally.
///
/// Lookup failures are folded into the returned result, so one bad record
/// never aborts the audit.
pub async fn resolve_record(
    record: &ZoneRecord,
    zone: &ZoneIndex<'_>,
    resolver: &dyn LookupHost,
) -> ResolutionResult {
    let outcome = match record.kind {
        RecordKind::A => ChainOutcome::Terminal {
            final_domain: record.name.clone(),
        },
        RecordKind::Cname => follow_cname_chain(&record.name, zone, MAX_CNAME_CHAIN_DEPTH),
    };

    match outcome {
        ChainOutcome::Terminal { final_domain } => {
            if final_domain != record.name {
                debug!("{} follows its CNAME chain to {}", record.name, final_domain);
            }
            let lookup = resolver.lookup_a(&final_domain).await;
            classify_lookup(&record.name, final_domain, lookup)
        }
        ChainOutcome::Broken {
            final_domain,
            reason,
        } => classify_broken(&record.name, final_domain, reason),
    }
}
