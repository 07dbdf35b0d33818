//! Route53 API access.
//!
//! This module wraps the AWS SDK calls the audit needs: building a client,
//! locating the hosted zone, and listing its record sets.

mod client;
mod records;
mod zones;

// Re-export public API
pub use client::build_client;
pub use records::list_zone_records;
pub use zones::find_zone_id;
