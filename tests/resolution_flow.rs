//! End-to-end tests for the resolution engine against an in-memory resolver.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use route53_audit::filter::{apply_filters, compile_ignore_patterns};
use route53_audit::resolve::{resolve_record, LookupHost, ZoneIndex};
use route53_audit::{RecordKind, ResolutionStatus, ZoneRecord};

/// Answers lookups from a fixed table and records every name queried.
///
/// Names starting with `slow.` simulate a resolver timeout; names absent
/// from the table get an empty answer, like NXDOMAIN does in production.
struct FakeResolver {
    answers: HashMap<String, Vec<Ipv4Addr>>,
    queried: Mutex<Vec<String>>,
}

impl FakeResolver {
    fn new(answers: &[(&str, &[&str])]) -> Self {
        let answers = answers
            .iter()
            .map(|(name, ips)| {
                let parsed = ips.iter().map(|ip| ip.parse().unwrap()).collect();
                (name.to_string(), parsed)
            })
            .collect();
        Self {
            answers,
            queried: Mutex::new(Vec::new()),
        }
    }

    fn queried_names(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl LookupHost for FakeResolver {
    async fn lookup_a(&self, name: &str) -> Result<Vec<Ipv4Addr>> {
        self.queried.lock().unwrap().push(name.to_string());
        if name.starts_with("slow.") {
            anyhow::bail!("request timed out");
        }
        Ok(self.answers.get(name).cloned().unwrap_or_default())
    }
}

fn a_record(name: &str, ips: &[&str]) -> ZoneRecord {
    ZoneRecord {
        name: name.to_string(),
        kind: RecordKind::A,
        values: ips.iter().map(|ip| ip.to_string()).collect(),
    }
}

fn cname_record(name: &str, target: &str) -> ZoneRecord {
    ZoneRecord {
        name: name.to_string(),
        kind: RecordKind::Cname,
        values: vec![target.to_string()],
    }
}

#[tokio::test]
async fn test_a_record_resolves_under_its_own_name() {
    let records = vec![a_record("a.example.com", &["203.0.113.5"])];
    let zone = ZoneIndex::new(&records);
    let resolver = FakeResolver::new(&[("a.example.com", &["203.0.113.5"])]);

    let result = resolve_record(&records[0], &zone, &resolver).await;

    assert_eq!(result.status, ResolutionStatus::ExternallyResolvable);
    assert_eq!(result.source, "a.example.com");
    assert_eq!(result.final_domain, "a.example.com");
    assert_eq!(result.resolved_ips, vec!["203.0.113.5".parse::<Ipv4Addr>().unwrap()]);
    assert_eq!(resolver.queried_names(), vec!["a.example.com"]);
}

#[tokio::test]
async fn test_cname_follows_chain_to_in_zone_a_record() {
    let records = vec![
        a_record("a.example.com", &["203.0.113.5"]),
        cname_record("b.example.com", "a.example.com"),
    ];
    let zone = ZoneIndex::new(&records);
    let resolver = FakeResolver::new(&[("a.example.com", &["203.0.113.5"])]);

    let a = resolve_record(&records[0], &zone, &resolver).await;
    let b = resolve_record(&records[1], &zone, &resolver).await;

    assert_eq!(a.status, ResolutionStatus::ExternallyResolvable);
    assert_eq!(b.status, ResolutionStatus::ExternallyResolvable);
    assert_eq!(b.source, "b.example.com");
    assert_eq!(b.final_domain, "a.example.com");
    // Both records end at the same terminal name
    assert_eq!(resolver.queried_names(), vec!["a.example.com", "a.example.com"]);
}

#[tokio::test]
async fn test_cname_to_external_target() {
    let records = vec![cname_record("www.example.com", "cdn.provider.net")];
    let zone = ZoneIndex::new(&records);
    let resolver = FakeResolver::new(&[("cdn.provider.net", &["198.51.100.7"])]);

    let result = resolve_record(&records[0], &zone, &resolver).await;

    assert_eq!(result.status, ResolutionStatus::ExternallyResolvable);
    assert_eq!(result.final_domain, "cdn.provider.net");
}

#[tokio::test]
async fn test_unresolvable_name_gets_shared_reason() {
    let records = vec![a_record("gone.example.com", &["203.0.113.9"])];
    let zone = ZoneIndex::new(&records);
    let resolver = FakeResolver::new(&[]);

    let result = resolve_record(&records[0], &zone, &resolver).await;

    assert_eq!(result.status, ResolutionStatus::NotResolvable);
    assert_eq!(
        result.reason.as_deref(),
        Some("no A records returned by resolver")
    );
    assert_eq!(result.ips_display(), "No DNS resolution");
}

#[tokio::test]
async fn test_lookup_failure_is_isolated_to_its_record() {
    let records = vec![
        a_record("slow.example.com", &["203.0.113.9"]),
        a_record("app.example.com", &["203.0.113.5"]),
    ];
    let zone = ZoneIndex::new(&records);
    let resolver = FakeResolver::new(&[("app.example.com", &["203.0.113.5"])]);

    let slow = resolve_record(&records[0], &zone, &resolver).await;
    let app = resolve_record(&records[1], &zone, &resolver).await;

    assert_eq!(slow.status, ResolutionStatus::NotResolvable);
    assert!(slow.reason.as_deref().unwrap_or_default().contains("timed out"));
    // The failure never leaks into the next record
    assert_eq!(app.status, ResolutionStatus::ExternallyResolvable);
}

#[tokio::test]
async fn test_chain_loop_never_queries_dns() {
    let records = vec![
        cname_record("a.example.com", "b.example.com"),
        cname_record("b.example.com", "a.example.com"),
    ];
    let zone = ZoneIndex::new(&records);
    let resolver = FakeResolver::new(&[]);

    let result = resolve_record(&records[0], &zone, &resolver).await;

    assert_eq!(result.status, ResolutionStatus::ChainBroken);
    assert!(result.reason.as_deref().unwrap_or_default().contains("loop"));
    assert!(resolver.queried_names().is_empty());
}

#[tokio::test]
async fn test_chain_past_depth_limit_breaks() {
    let mut records = Vec::new();
    for i in 0..12 {
        records.push(cname_record(
            &format!("n{}.example.com", i),
            &format!("n{}.example.com", i + 1),
        ));
    }
    let zone = ZoneIndex::new(&records);
    let resolver = FakeResolver::new(&[]);

    let result = resolve_record(&records[0], &zone, &resolver).await;

    assert_eq!(result.status, ResolutionStatus::ChainBroken);
    assert!(result.reason.as_deref().unwrap_or_default().contains("exceeded"));
    assert!(resolver.queried_names().is_empty());
}

#[tokio::test]
async fn test_cname_target_is_normalized_before_the_hop() {
    // Targets as typed into Route53 may carry case and a trailing dot
    let records = vec![
        cname_record("www.example.com", "A.Example.COM."),
        a_record("a.example.com", &["203.0.113.5"]),
    ];
    let zone = ZoneIndex::new(&records);
    let resolver = FakeResolver::new(&[("a.example.com", &["203.0.113.5"])]);

    let result = resolve_record(&records[0], &zone, &resolver).await;

    assert_eq!(result.status, ResolutionStatus::ExternallyResolvable);
    assert_eq!(result.final_domain, "a.example.com");
}

#[tokio::test]
async fn test_alias_record_is_audited_by_name() {
    // Route53 alias A records list no resource records
    let records = vec![ZoneRecord {
        name: "lb.example.com".to_string(),
        kind: RecordKind::A,
        values: vec![],
    }];
    let zone = ZoneIndex::new(&records);
    let resolver = FakeResolver::new(&[("lb.example.com", &["203.0.113.20"])]);

    let result = resolve_record(&records[0], &zone, &resolver).await;

    assert_eq!(result.status, ResolutionStatus::ExternallyResolvable);
    assert_eq!(resolver.queried_names(), vec!["lb.example.com"]);
}

#[tokio::test]
async fn test_empty_target_cname_breaks_chain() {
    let records = vec![ZoneRecord {
        name: "bad.example.com".to_string(),
        kind: RecordKind::Cname,
        values: vec![],
    }];
    let zone = ZoneIndex::new(&records);
    let resolver = FakeResolver::new(&[]);

    let result = resolve_record(&records[0], &zone, &resolver).await;

    assert_eq!(result.status, ResolutionStatus::ChainBroken);
    assert!(result.reason.as_deref().unwrap_or_default().contains("no target"));
}

#[tokio::test]
async fn test_ignored_records_are_skipped_but_still_route_chains() {
    let records = vec![
        a_record("staging.example.com", &["203.0.113.9"]),
        cname_record("www.example.com", "staging.example.com"),
        a_record("app.example.com", &["203.0.113.5"]),
    ];
    // The index spans the full listing; the audit loop only the kept records
    let zone = ZoneIndex::new(&records);
    let patterns = compile_ignore_patterns(&["^staging".to_string()]).unwrap();
    let audited = apply_filters(&records, &patterns, None);
    assert_eq!(audited.len(), 2);

    let resolver = FakeResolver::new(&[
        ("staging.example.com", &["203.0.113.9"]),
        ("app.example.com", &["203.0.113.5"]),
    ]);

    let mut results = Vec::new();
    for record in &audited {
        results.push(resolve_record(record, &zone, &resolver).await);
    }

    // staging itself was not audited, but the chain through it still works
    assert_eq!(results[0].source, "www.example.com");
    assert_eq!(results[0].final_domain, "staging.example.com");
    assert_eq!(results[0].status, ResolutionStatus::ExternallyResolvable);
    assert_eq!(results[1].source, "app.example.com");
}
