//! External A record lookups.

use std::net::Ipv4Addr;

use anyhow::Result;
use async_trait::async_trait;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

/// Resolves a name to its A records against live DNS.
///
/// The audit engine only needs this one question answered, so it talks to
/// DNS through this trait and tests substitute an in-memory implementation.
///
/// Implementations return `Ok` with an empty vector when DNS answered
/// definitively that there is nothing there (NXDOMAIN or an empty answer),
/// and `Err` only for query failures such as timeouts, where the truth is
/// unknown.
#[async_trait]
pub trait LookupHost: Send + Sync {
    /// Looks up the IPv4 addresses for a name.
    async fn lookup_a(&self, name: &str) -> Result<Vec<Ipv4Addr>>;
}

#[async_trait]
impl LookupHost for TokioAsyncResolver {
    async fn lookup_a(&self, name: &str) -> Result<Vec<Ipv4Addr>> {
        // Query the fully qualified name so resolver search lists never apply
        let fqdn = format!("{}.", name.trim_end_matches('.'));
        match self.lookup(fqdn, RecordType::A).await {
            Ok(lookup) => {
                let ips: Vec<Ipv4Addr> = lookup
                    .iter()
                    .filter_map(|rdata| {
                        if let RData::A(a) = rdata {
                            Some(a.0)
                        } else {
                            None
                        }
                    })
                    .collect();
                Ok(ips)
            }
            Err(e) => {
                let error_msg = e.to_string();
                // "no records found" is a definitive answer - return empty vector
                if error_msg.contains("no records found") || error_msg.contains("NXDomain") {
                    Ok(Vec::new())
                } else {
                    // Actual failures (timeouts, network errors, etc.) are propagated
                    // so the record can be reported as a lookup failure
                    if error_msg.contains("timeout") || error_msg.contains("timed out") {
                        log::warn!("A record lookup timed out for {name}: {e}");
                    } else {
                        log::warn!("Failed to lookup A records for {name}: {e}");
                    }
                    Err(e.into())
                }
            }
        }
    }
}
