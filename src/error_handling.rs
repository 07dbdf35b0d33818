//! Error types for the audit pipeline.

use std::fmt;
use std::path::PathBuf;

use aws_sdk_route53::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// Errors that can occur while bringing up process-wide services.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum InitializationError {
    /// Failed to initialize the logger
    #[error("Failed to initialize logger: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    /// Failed to initialize the DNS resolver
    #[error("Failed to initialize DNS resolver: {0}")]
    DnsResolverError(String),
}

/// Errors that can occur while auditing a hosted zone.
#[derive(Error, Debug)]
pub enum AuditError {
    /// An `--ignore` argument was not a valid regular expression
    #[error("Invalid ignore pattern '{pattern}': {source}")]
    InvalidIgnorePattern {
        /// The pattern as supplied on the command line
        pattern: String,
        /// The compile error from the regex engine
        #[source]
        source: regex::Error,
    },

    /// No hosted zone in the account matched the requested name
    #[error("No {} hosted zone found matching '{zone}'", if *.private { "private" } else { "public" })]
    ZoneNotFound {
        /// The zone name that was searched for
        zone: String,
        /// Whether the search was restricted to private zones
        private: bool,
    },

    /// The AWS call failed because credentials were missing or rejected
    #[error("Authentication failure while {action}: {message}")]
    Auth {
        /// What the audit was doing when the call failed
        action: &'static str,
        /// The rendered AWS error, including its context chain
        message: String,
    },

    /// The AWS call failed for a reason other than authentication
    #[error("Route53 API error while {action}: {message}")]
    Route53Api {
        /// What the audit was doing when the call failed
        action: &'static str,
        /// The rendered AWS error, including its context chain
        message: String,
    },

    /// The CSV report could not be written
    #[error("Failed to write CSV report to {}: {source}", .path.display())]
    CsvWrite {
        /// Destination path of the report
        path: PathBuf,
        /// The underlying writer error
        #[source]
        source: csv::Error,
    },
}

/// Service error codes that indicate an authentication or credential problem
/// rather than a fault in the request itself.
const AUTH_ERROR_CODES: &[&str] = &[
    "AccessDenied",
    "AccessDeniedException",
    "UnrecognizedClientException",
    "InvalidClientTokenId",
    "ExpiredToken",
    "ExpiredTokenException",
    "SignatureDoesNotMatch",
    "MissingAuthenticationToken",
];

/// Sorts an AWS SDK error into [`AuditError::Auth`] or [`AuditError::Route53Api`].
///
/// Service errors are matched on their error code. Errors without a service
/// response (credential provider failures surface this way) fall back to a
/// substring check on the rendered message.
pub(crate) fn classify_sdk_error<E, R>(action: &'static str, err: SdkError<E, R>) -> AuditError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: fmt::Debug + Send + Sync + 'static,
{
    let code = err
        .as_service_error()
        .and_then(|service_err| service_err.code())
        .map(str::to_string);
    let message = DisplayErrorContext(err).to_string();

    let is_auth = match &code {
        Some(code) => AUTH_ERROR_CODES.contains(&code.as_str()),
        None => {
            let lower = message.to_lowercase();
            lower.contains("credential") || lower.contains("profile")
        }
    };

    if is_auth {
        AuditError::Auth { action, message }
    } else {
        AuditError::Route53Api { action, message }
    }
}
