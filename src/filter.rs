//! Record filtering.
//!
//! Applies the `--ignore` regular expressions and the `--limit` cap to the
//! listed zone records before resolution starts.

use log::{debug, info};
use regex::Regex;

use crate::error_handling::AuditError;
use crate::models::ZoneRecord;

/// Compiles the `--ignore` arguments into regular expressions.
///
/// # Errors
///
/// Returns `AuditError::InvalidIgnorePattern` for the first pattern that
/// fails to compile, naming the offending pattern.
pub fn compile_ignore_patterns(patterns: &[String]) -> Result<Vec<Regex>, AuditError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| AuditError::InvalidIgnorePattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

/// Returns true when any pattern matches the record's name or one of its
/// values.
///
/// Matching uses search semantics (`Regex::is_match`), so a pattern matches
/// anywhere in the string unless anchored. Patterns are case-sensitive;
/// record names and values are already lowercased when listed.
pub fn is_ignored(record: &ZoneRecord, patterns: &[Regex]) -> bool {
    patterns.iter().any(|pattern| {
        pattern.is_match(&record.name) || record.values.iter().any(|value| pattern.is_match(value))
    })
}

/// Drops ignored records, then caps the remainder at `limit`.
///
/// The cap applies after filtering, so `--limit 5` always audits five
/// records when five survive the ignore patterns.
pub fn apply_filters(
    records: &[ZoneRecord],
    patterns: &[Regex],
    limit: Option<usize>,
) -> Vec<ZoneRecord> {
    let mut kept: Vec<ZoneRecord> = Vec::new();
    for record in records {
        if is_ignored(record, patterns) {
            debug!("Ignoring record {} (matched ignore pattern)", record.name);
            continue;
        }
        kept.push(record.clone());
    }

    if let Some(limit) = limit {
        if kept.len() > limit {
            info!("Limiting audit to the first {} of {} record(s)", limit, kept.len());
            kept.truncate(limit);
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordKind;
    use proptest::prelude::*;

    fn a_record(name: &str) -> ZoneRecord {
        ZoneRecord {
            name: name.to_string(),
            kind: RecordKind::A,
            values: vec!["203.0.113.5".to_string()],
        }
    }

    fn cname_record(name: &str, target: &str) -> ZoneRecord {
        ZoneRecord {
            name: name.to_string(),
            kind: RecordKind::Cname,
            values: vec![target.to_string()],
        }
    }

    #[test]
    fn test_compile_rejects_invalid_pattern() {
        let result = compile_ignore_patterns(&["[".to_string()]);
        match result {
            Err(AuditError::InvalidIgnorePattern { pattern, .. }) => assert_eq!(pattern, "["),
            other => panic!("expected InvalidIgnorePattern, got {:?}", other),
        }
    }

    #[test]
    fn test_ignored_by_name() {
        let patterns = compile_ignore_patterns(&["^staging".to_string()]).unwrap();
        assert!(is_ignored(&a_record("staging.example.com"), &patterns));
        assert!(!is_ignored(&a_record("app.example.com"), &patterns));
    }

    #[test]
    fn test_ignored_by_value() {
        // A pattern can suppress records pointing at a decommissioned target
        let patterns = compile_ignore_patterns(&["old-lb\\.example\\.com".to_string()]).unwrap();
        let record = cname_record("www.example.com", "old-lb.example.com");
        assert!(is_ignored(&record, &patterns));
    }

    #[test]
    fn test_unanchored_pattern_matches_anywhere() {
        let patterns = compile_ignore_patterns(&["internal".to_string()]).unwrap();
        assert!(is_ignored(&a_record("db.internal.example.com"), &patterns));
    }

    #[test]
    fn test_no_patterns_keeps_everything() {
        let records = vec![a_record("a.example.com"), a_record("b.example.com")];
        let kept = apply_filters(&records, &[], None);
        assert_eq!(kept, records);
    }

    #[test]
    fn test_limit_applies_after_filtering() {
        let records = vec![
            a_record("staging.example.com"),
            a_record("a.example.com"),
            a_record("b.example.com"),
            a_record("c.example.com"),
        ];
        let patterns = compile_ignore_patterns(&["^staging".to_string()]).unwrap();
        let kept = apply_filters(&records, &patterns, Some(2));
        assert_eq!(kept, vec![a_record("a.example.com"), a_record("b.example.com")]);
    }

    #[test]
    fn test_limit_zero_audits_nothing() {
        let records = vec![a_record("a.example.com")];
        assert!(apply_filters(&records, &[], Some(0)).is_empty());
    }

    proptest! {
        #[test]
        fn test_apply_filters_is_idempotent(
            names in prop::collection::vec("(ignored|kept)[a-z]{0,6}\\.example\\.com", 0..16)
        ) {
            let records: Vec<ZoneRecord> = names.iter().map(|n| a_record(n)).collect();
            let patterns = compile_ignore_patterns(&["^ignored".to_string()]).unwrap();
            let once = apply_filters(&records, &patterns, None);
            let twice = apply_filters(&once, &patterns, None);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn test_limit_caps_output_len(
            names in prop::collection::vec("[a-z]{1,8}\\.example\\.com", 0..32),
            limit in 0usize..40
        ) {
            let records: Vec<ZoneRecord> = names.iter().map(|n| a_record(n)).collect();
            let kept = apply_filters(&records, &[], Some(limit));
            prop_assert!(kept.len() <= limit);
            prop_assert!(kept.len() <= records.len());
        }

        #[test]
        fn test_kept_records_never_match_patterns(
            names in prop::collection::vec("(ignored|kept)[a-z]{0,6}\\.example\\.com", 0..16)
        ) {
            let records: Vec<ZoneRecord> = names.iter().map(|n| a_record(n)).collect();
            let patterns = compile_ignore_patterns(&["^ignored".to_string()]).unwrap();
            for record in apply_filters(&records, &patterns, None) {
                prop_assert!(!is_ignored(&record, &patterns));
            }
        }
    }
}
