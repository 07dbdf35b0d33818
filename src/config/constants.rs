//! Configuration constants.

// Network operation timeouts
/// DNS query timeout in seconds
///
/// Kept short so a dead or unreachable nameserver fails a record in seconds
/// instead of stalling the whole audit.
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Number of attempts per DNS query before giving up
pub const DNS_LOOKUP_ATTEMPTS: usize = 2;
/// UDP port queried on a caller-supplied nameserver
pub const DNS_PORT: u16 = 53;

// Chain traversal
/// Maximum number of CNAME hops to follow inside a zone
///
/// Chains longer than this are reported as broken rather than followed
/// further. Legitimate alias chains are one or two hops; anything past ten
/// is almost certainly a misconfiguration.
pub const MAX_CNAME_CHAIN_DEPTH: usize = 10;

/// Region used to anchor the Route53 endpoint when none is configured.
///
/// Route53 is a global service, so the region only affects request signing.
pub const DEFAULT_AWS_REGION: &str = "us-east-1";
