//! Core domain types shared across the audit pipeline.

use std::fmt;
use std::net::Ipv4Addr;

use strum_macros::EnumIter;

/// Lowercases a DNS name and strips any trailing dots.
///
/// Route53 lists fully qualified names (`app.example.com.`) while operators
/// type bare ones (`app.example.com`); every comparison in the audit goes
/// through this normalization so the two spellings always match.
pub fn normalize_name(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

/// DNS record types the audit inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Address record mapping a name to IPv4 addresses
    A,
    /// Alias record mapping a name to another name
    Cname,
}

impl RecordKind {
    /// Returns the record type as it appears in zone listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::A => "A",
            RecordKind::Cname => "CNAME",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single A or CNAME record set fetched from the hosted zone.
///
/// `name` and `values` are already normalized. Alias A records carry an
/// empty `values` list; they are still audited by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRecord {
    /// Record set name
    pub name: String,
    /// Record type (A or CNAME)
    pub kind: RecordKind,
    /// Record values: IP literals for A records, the target name for CNAMEs
    pub values: Vec<String>,
}

impl ZoneRecord {
    /// Returns the CNAME target, if this is a CNAME record with a value.
    pub fn cname_target(&self) -> Option<&str> {
        if self.kind == RecordKind::Cname {
            self.values.first().map(String::as_str)
        } else {
            None
        }
    }
}

/// Outcome classification for one audited record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ResolutionStatus {
    /// The final domain resolved to at least one IP address
    ExternallyResolvable,
    /// The final domain did not resolve (NXDOMAIN, empty answer, or query failure)
    NotResolvable,
    /// The CNAME chain never reached a terminal name (loop or too many hops)
    ChainBroken,
}

impl ResolutionStatus {
    /// Returns a human-readable string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionStatus::ExternallyResolvable => "externally resolvable",
            ResolutionStatus::NotResolvable => "not resolvable",
            ResolutionStatus::ChainBroken => "chain broken",
        }
    }
}

impl fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The audit verdict for a single zone record.
#[derive(Debug, Clone)]
pub struct ResolutionResult {
    /// Record name the audit started from
    pub source: String,
    /// Name that was (or would have been) queried externally
    pub final_domain: String,
    /// Outcome classification
    pub status: ResolutionStatus,
    /// Addresses the final domain resolved to, sorted ascending
    pub resolved_ips: Vec<Ipv4Addr>,
    /// Why the record did not resolve, for non-resolvable outcomes
    pub reason: Option<String>,
}

impl ResolutionResult {
    /// True when the record resolved externally to at least one address.
    pub fn is_resolvable(&self) -> bool {
        self.status == ResolutionStatus::ExternallyResolvable
    }

    /// Renders the resolved addresses for console and CSV output.
    ///
    /// Joins the sorted addresses with `", "`, or returns the literal
    /// `No DNS resolution` when there are none.
    pub fn ips_display(&self) -> String {
        if self.resolved_ips.is_empty() {
            "No DNS resolution".to_string()
        } else {
            self.resolved_ips
                .iter()
                .map(Ipv4Addr::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}
