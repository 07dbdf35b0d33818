//! DNS resolver initialization.
//!
//! This module provides functions to initialize the external DNS resolver
//! with proper timeout configuration.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{DNS_LOOKUP_ATTEMPTS, DNS_PORT, DNS_TIMEOUT_SECS};
use crate::error_handling::InitializationError;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver used for external lookups.
///
/// With no nameserver argument the resolver uses the system's DNS
/// configuration (`/etc/resolv.conf` on Unix), so the audit sees what a
/// client on this machine would see. Passing a nameserver IP queries that
/// server instead, over plain UDP and TCP on port 53.
///
/// Timeouts are configured to prevent hanging on slow or unresponsive DNS
/// servers, and search domain appending is disabled so only the exact
/// record names are queried.
///
/// # Arguments
///
/// * `nameserver` - Optional nameserver IP overriding the system configuration
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc`, or an error if
/// initialization fails.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the system DNS
/// configuration cannot be read.
pub fn init_resolver(
    nameserver: Option<IpAddr>,
) -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    // Configure DNS resolver with timeouts
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_LOOKUP_ATTEMPTS; // Reduce retry attempts to fail faster
                                         // Set ndots to 0 to prevent search domain appending
    opts.ndots = 0;

    let config = match nameserver {
        Some(ip) => {
            let group = NameServerConfigGroup::from_ips_clear(&[ip], DNS_PORT, true);
            ResolverConfig::from_parts(None, vec![], group)
        }
        None => {
            // Take the system's nameserver list but keep our own opts, so the
            // timeout and ndots settings above apply on this path too
            let (config, _system_opts) =
                hickory_resolver::system_conf::read_system_conf().map_err(|e| {
                    InitializationError::DnsResolverError(format!(
                        "failed to read system DNS configuration: {e}"
                    ))
                })?;
            config
        }
    };

    // In hickory-resolver 0.24, TokioAsyncResolver::tokio() constructs the
    // resolver directly from a config and opts pair
    Ok(Arc::new(TokioAsyncResolver::tokio(config, opts)))
}
