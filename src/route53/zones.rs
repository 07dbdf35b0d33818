//! Hosted zone lookup.

use aws_sdk_route53::Client;
use log::debug;

use crate::error_handling::{classify_sdk_error, AuditError};
use crate::models::normalize_name;

/// Strips the `/hostedzone/` prefix Route53 prepends to zone IDs.
fn bare_zone_id(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}

/// Finds the ID of the hosted zone matching a name and visibility.
///
/// Paginates `ListHostedZones` and returns the first zone whose normalized
/// name equals the normalized requested name and whose private flag matches
/// `private`. Name comparison is case-insensitive and ignores trailing dots.
///
/// # Arguments
///
/// * `client` - The Route53 client
/// * `zone` - Hosted zone name to search for
/// * `private` - Whether to match private zones instead of public ones
///
/// # Returns
///
/// The bare zone ID, without the `/hostedzone/` prefix.
///
/// # Errors
///
/// Returns `AuditError::ZoneNotFound` when no zone matches, or an
/// authentication/API error when the listing call fails.
pub async fn find_zone_id(
    client: &Client,
    zone: &str,
    private: bool,
) -> Result<String, AuditError> {
    let wanted = normalize_name(zone);
    let mut pages = client.list_hosted_zones().into_paginator().items().send();

    while let Some(item) = pages.next().await {
        let hosted_zone = item.map_err(|e| classify_sdk_error("listing hosted zones", e))?;
        let is_private = hosted_zone
            .config()
            .map(|zone_config| zone_config.private_zone())
            .unwrap_or(false);

        if normalize_name(hosted_zone.name()) == wanted && is_private == private {
            let id = bare_zone_id(hosted_zone.id()).to_string();
            debug!("Matched hosted zone {} (id {})", hosted_zone.name(), id);
            return Ok(id);
        }
    }

    Err(AuditError::ZoneNotFound {
        zone: zone.to_string(),
        private,
    })
}
