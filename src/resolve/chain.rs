//! In-zone CNAME chain walking.

use std::collections::{HashMap, HashSet};

use crate::models::{normalize_name, RecordKind, ZoneRecord};

/// Name-indexed view of a zone's records.
///
/// Built over the full listing, before ignore filtering, so chains can pass
/// through records the operator chose not to audit directly. When a name
/// appears more than once the first listed record wins.
pub struct ZoneIndex<'a> {
    by_name: HashMap<&'a str, &'a ZoneRecord>,
}

impl<'a> ZoneIndex<'a> {
    /// Indexes a record listing by name.
    pub fn new(records: &'a [ZoneRecord]) -> Self {
        let mut by_name = HashMap::new();
        for record in records {
            by_name.entry(record.name.as_str()).or_insert(record);
        }
        Self { by_name }
    }

    /// Looks up the record for a normalized name.
    pub fn get(&self, name: &str) -> Option<&'a ZoneRecord> {
        self.by_name.get(name).copied()
    }

    /// Number of distinct names in the index.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// True when the zone listing held no A or CNAME records.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Where a CNAME chain walk ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainOutcome {
    /// The chain reached a name to resolve externally
    Terminal {
        /// The terminal name
        final_domain: String,
    },
    /// The chain never terminated inside the depth bound
    Broken {
        /// The last name reached before the walk gave up
        final_domain: String,
        /// What broke the chain
        reason: String,
    },
}

/// Follows CNAME records through the zone from `start` until the chain
/// leaves the zone, lands on an in-zone A record, or breaks.
///
/// A name absent from the index is terminal: the zone has nothing more to
/// say about it, and external DNS gets the last word. Revisiting a name
/// breaks the chain as a loop; so does exceeding `max_depth` hops, and so
/// does a CNAME record with no target value.
pub fn follow_cname_chain(start: &str, zone: &ZoneIndex<'_>, max_depth: usize) -> ChainOutcome {
    let mut current = normalize_name(start);
    let mut visited: HashSet<String> = HashSet::new();
    let mut hops = 0usize;

    loop {
        if hops > max_depth {
            let reason = format!("CNAME chain exceeded {} hops", max_depth);
            return ChainOutcome::Broken {
                final_domain: current,
                reason,
            };
        }

        if !visited.insert(current.clone()) {
            let reason = format!("CNAME loop detected at {}", current);
            return ChainOutcome::Broken {
                final_domain: current,
                reason,
            };
        }

        match zone.get(&current) {
            Some(record) if record.kind == RecordKind::Cname => match record.cname_target() {
                Some(target) => {
                    current = normalize_name(target);
                    hops += 1;
                }
                None => {
                    let reason = format!("CNAME record {} has no target", current);
                    return ChainOutcome::Broken {
                        final_domain: current,
                        reason,
                    };
                }
            },
            // In-zone A record or a name the zone does not define
            _ => return ChainOutcome::Terminal { final_domain: current },
        }
    }
}
