//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;
use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which resolution results the CSV export contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CsvScope {
    /// Every audited record
    All,
    /// Only records whose final domain resolved to at least one IP
    Resolved,
    /// Only records that did not resolve (including broken chains)
    Unresolved,
}

impl CsvScope {
    /// Returns the scope as it is spelled on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            CsvScope::All => "all",
            CsvScope::Resolved => "resolved",
            CsvScope::Unresolved => "unresolved",
        }
    }
}

impl fmt::Display for CsvScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command-line options.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// Only `--zone` is required; everything else has a sensible default.
///
/// # Examples
///
/// ```bash
/// # Audit a public zone
/// route53_audit --zone example.com
///
/// # Audit the private zone of the same name via a named profile
/// route53_audit --zone example.com --private --profile prod
///
/// # Export only the unresolved records to CSV, skipping internal names
/// route53_audit --zone example.com --csv report.csv --csv-scope unresolved --ignore 'internal'
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "route53_audit",
    about = "Audits Route53 A and CNAME records for external DNS resolvability."
)]
pub struct Opt {
    /// Hosted zone name to audit (e.g. example.com)
    #[arg(long)]
    pub zone: String,

    /// Named AWS credential profile (default credential chain if omitted)
    #[arg(long)]
    pub profile: Option<String>,

    /// Match the private hosted zone with the given name
    #[arg(long)]
    pub private: bool,

    /// Nameserver IP to resolve against instead of the system DNS configuration
    #[arg(long)]
    pub resolver: Option<IpAddr>,

    /// Suppress per-record console output (the summary still prints)
    #[arg(long)]
    pub silent: bool,

    /// Write results to a CSV file at this path
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Which records the CSV export contains: all|resolved|unresolved
    #[arg(long, value_enum, default_value_t = CsvScope::All)]
    pub csv_scope: CsvScope,

    /// Audit at most this many records (applied after ignore filtering)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Skip records whose name or value matches this regex (repeatable)
    #[arg(long)]
    pub ignore: Vec<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies; `zone` is the
/// only field without a usable default.
///
/// # Examples
///
/// ```no_run
/// use route53_audit::Config;
///
/// let config = Config {
///     zone: "example.com".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Hosted zone name to audit
    pub zone: String,

    /// Named AWS credential profile
    pub profile: Option<String>,

    /// Match the private hosted zone instead of the public one
    pub private: bool,

    /// Nameserver overriding the system DNS configuration
    pub resolver: Option<IpAddr>,

    /// Suppress per-record console output
    pub silent: bool,

    /// CSV export path
    pub csv: Option<PathBuf>,

    /// Which records the CSV export contains
    pub csv_scope: CsvScope,

    /// Maximum number of records to audit
    pub limit: Option<usize>,

    /// Regexes of record names or values to skip
    pub ignore: Vec<String>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zone: String::new(),
            profile: None,
            private: false,
            resolver: None,
            silent: false,
            csv: None,
            csv_scope: CsvScope::All,
            limit: None,
            ignore: Vec::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            zone: opt.zone,
            profile: opt.profile,
            private: opt.private,
            resolver: opt.resolver,
            silent: opt.silent,
            csv: opt.csv,
            csv_scope: opt.csv_scope,
            limit: opt.limit,
            ignore: opt.ignore,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
