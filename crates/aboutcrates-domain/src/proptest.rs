//! Property-based tests for the collector.
//!
//! Invariants covered:
//! - output identities are distinct
//! - output size equals the number of distinct input identities
//! - output is sorted by the composite key and identical across runs

use crate::collector::ArtifactCollector;
use crate::log::NoopLog;
use crate::test_support::{StaticConfiguration, artifact, declared};
use aboutcrates_types::ResolvedArtifact;
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// Strategies
// ============================================================================

fn arb_group() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("crates.io".to_string()),
        Just("local".to_string()),
        Just("github.com".to_string()),
        prop::string::string_regex("[a-z]{1,4}(\\.[a-z]{1,4}){0,2}").unwrap(),
    ]
}

fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_-]{0,11}").unwrap()
}

fn arb_version() -> impl Strategy<Value = String> {
    (0u32..4, 0u32..12, 0u32..12)
        .prop_map(|(major, minor, patch)| format!("{}.{}.{}", major, minor, patch))
}

/// Artifacts drawn from a small pool so duplicates across transitive paths are common.
fn arb_artifacts() -> impl Strategy<Value = Vec<ResolvedArtifact>> {
    prop::collection::vec((arb_group(), arb_name(), arb_version()), 1..12).prop_flat_map(
        |pool| {
            let len = pool.len();
            prop::collection::vec(0..len, 0..40).prop_map(move |picks| {
                picks
                    .into_iter()
                    .map(|i| {
                        let (g, n, v) = &pool[i];
                        artifact(g, n, v)
                    })
                    .collect()
            })
        },
    )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn output_has_one_entry_per_distinct_identity(
        artifacts in arb_artifacts(),
        declared_count in 1usize..8,
    ) {
        let declared_deps = (0..declared_count).map(|i| declared(&format!("dep{i}"))).collect();
        let distinct: HashSet<_> = artifacts.iter().map(|a| a.identity.clone()).collect();
        let cfg = StaticConfiguration::new("runtime", declared_deps, artifacts);

        let out = ArtifactCollector::new(NoopLog).collect(&cfg).unwrap();

        prop_assert_eq!(out.len(), distinct.len());
        let out_ids: HashSet<_> = out.iter().map(|a| a.identity.clone()).collect();
        prop_assert_eq!(out_ids.len(), out.len());
        prop_assert_eq!(out_ids, distinct);
    }

    #[test]
    fn output_is_sorted_and_reproducible(artifacts in arb_artifacts()) {
        let cfg = StaticConfiguration::new("runtime", vec![declared("root")], artifacts);
        let collector = ArtifactCollector::new(NoopLog);

        let first = collector.collect(&cfg).unwrap();
        let second = collector.collect(&cfg).unwrap();
        prop_assert_eq!(&first, &second);

        let keys: Vec<String> = first.iter().map(|a| a.identity.sort_key()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }

    #[test]
    fn input_order_does_not_change_output_identities(artifacts in arb_artifacts()) {
        let mut reversed = artifacts.clone();
        reversed.reverse();
        let a = StaticConfiguration::new("runtime", vec![declared("root")], artifacts);
        let b = StaticConfiguration::new("runtime", vec![declared("root")], reversed);
        let collector = ArtifactCollector::new(NoopLog);

        let ids = |out: Vec<ResolvedArtifact>| -> Vec<String> {
            out.into_iter().map(|a| a.identity.sort_key()).collect()
        };
        prop_assert_eq!(ids(collector.collect(&a).unwrap()), ids(collector.collect(&b).unwrap()));
    }
}
