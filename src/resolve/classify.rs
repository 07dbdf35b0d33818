//! Mapping of lookup and chain outcomes onto resolution statuses.

use std::net::Ipv4Addr;

use anyhow::Result;

use crate::models::{ResolutionResult, ResolutionStatus};

/// Reason attached when DNS answered but had no A records to give.
const NO_ANSWER_REASON: &str = "no A records returned by resolver";

/// Classifies the external lookup outcome for a record whose chain reached
/// a terminal name.
///
/// Addresses are sorted ascending and deduplicated. An empty answer and an
/// NXDOMAIN both arrive here as `Ok` with no addresses and share one
/// reason; a failed query keeps its error text as the reason.
pub fn classify_lookup(
    source: &str,
    final_domain: String,
    lookup: Result<Vec<Ipv4Addr>>,
) -> ResolutionResult {
    match lookup {
        Ok(mut ips) if !ips.is_empty() => {
            ips.sort_unstable();
            ips.dedup();
            ResolutionResult {
                source: source.to_string(),
                final_domain,
                status: ResolutionStatus::ExternallyResolvable,
                resolved_ips: ips,
                reason: None,
            }
        }
        Ok(_) => ResolutionResult {
            source: source.to_string(),
            final_domain,
            status: ResolutionStatus::NotResolvable,
            resolved_ips: Vec::new(),
            reason: Some(NO_ANSWER_REASON.to_string()),
        },
        Err(e) => ResolutionResult {
            source: source.to_string(),
            final_domain,
            status: ResolutionStatus::NotResolvable,
            resolved_ips: Vec::new(),
            reason: Some(e.to_string()),
        },
    }
}

/// Classifies a record whose CNAME chain never reached a terminal name.
pub fn classify_broken(source: &str, final_domain: String, reason: String) -> ResolutionResult {
    ResolutionResult {
        source: source.to_string(),
        final_domain,
        status: ResolutionStatus::ChainBroken,
        resolved_ips: Vec::new(),
        reason: Some(reason),
    }
}
