//! Record set listing.

use aws_sdk_route53::types::RrType;
use aws_sdk_route53::Client;
use log::{debug, trace};

use crate::error_handling::{classify_sdk_error, AuditError};
use crate::models::{normalize_name, RecordKind, ZoneRecord};

/// Lists all A and CNAME record sets in a hosted zone.
///
/// `ListResourceRecordSets` pages with a three-part continuation token
/// (name, type, identifier), which the SDK does not generate a paginator
/// for, so the truncation loop is spelled out here. Record sets of other
/// types are skipped. Names and values are normalized on the way in; alias
/// record sets come back with an empty value list.
///
/// # Arguments
///
/// * `client` - The Route53 client
/// * `zone_id` - Bare hosted zone ID
///
/// # Returns
///
/// The zone's A and CNAME records in listing order.
///
/// # Errors
///
/// Returns an authentication/API error when a listing call fails.
pub async fn list_zone_records(
    client: &Client,
    zone_id: &str,
) -> Result<Vec<ZoneRecord>, AuditError> {
    let mut records = Vec::new();
    let mut next_name: Option<String> = None;
    let mut next_type: Option<RrType> = None;
    let mut next_identifier: Option<String> = None;

    loop {
        let output = client
            .list_resource_record_sets()
            .hosted_zone_id(zone_id)
            .set_start_record_name(next_name.take())
            .set_start_record_type(next_type.take())
            .set_start_record_identifier(next_identifier.take())
            .send()
            .await
            .map_err(|e| classify_sdk_error("listing zone records", e))?;

        for record_set in output.resource_record_sets() {
            let kind = match record_set.r#type() {
                RrType::A => RecordKind::A,
                RrType::Cname => RecordKind::Cname,
                other => {
                    trace!("Skipping {} record set {}", other.as_str(), record_set.name());
                    continue;
                }
            };

            let values = record_set
                .resource_records()
                .iter()
                .map(|rr| normalize_name(rr.value()))
                .collect();

            records.push(ZoneRecord {
                name: normalize_name(record_set.name()),
                kind,
                values,
            });
        }

        if output.is_truncated() {
            next_name = output.next_record_name().map(str::to_string);
            next_type = output.next_record_type().cloned();
            next_identifier = output.next_record_identifier().map(str::to_string);
        } else {
            break;
        }
    }

    debug!("Listed {} A/CNAME record set(s) in zone {}", records.len(), zone_id);
    Ok(records)
}
