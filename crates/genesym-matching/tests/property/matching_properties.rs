//! Property tests for match resolution: clean-up idempotence, determinism,
//! bounded lookup calls, and the `changed` invariant.

use std::collections::BTreeSet;

use proptest::prelude::*;

use genesym_core::models::{LookupMatch, LookupRecord, MatchRecord, MatchType};
use genesym_matching::resolver::clean_up;
use genesym_matching::{ManipulationPipeline, MatchResolver, TableLookup};

const POOL: [&str; 6] = ["AA", "BB", "CC", "DD", "EE", "FF"];

fn match_type_strategy() -> impl Strategy<Value = MatchType> {
    prop_oneof![
        Just(MatchType::Approved),
        Just(MatchType::Previous),
        Just(MatchType::Alias),
    ]
}

fn row_strategy() -> impl Strategy<Value = MatchRecord> {
    (
        0..POOL.len(),
        0..POOL.len(),
        prop_oneof![Just("identity"), Just("dot_to_dash"), Just("discard_after_dot")],
        any::<bool>(),
        match_type_strategy(),
    )
        .prop_map(|(o, a, resolution, manipulated_input, match_type)| {
            let original = POOL[o];
            let input = if manipulated_input {
                format!("{original}-1")
            } else {
                original.to_string()
            };
            MatchRecord::matched(original, resolution, &input, POOL[a], match_type, None)
        })
}

fn lookup_strategy() -> impl Strategy<Value = Vec<LookupRecord>> {
    prop::collection::vec(
        (
            0..POOL.len(),
            0..POOL.len(),
            prop_oneof![
                Just(LookupMatch::Approved),
                Just(LookupMatch::Previous),
                Just(LookupMatch::Alias),
            ],
        )
            .prop_map(|(i, a, m)| LookupRecord {
                input: POOL[i].to_string(),
                approved_symbol: Some(POOL[a].to_string()),
                match_type: Some(m),
                location: None,
            }),
        0..12,
    )
}

fn input_strategy() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(
        (0..POOL.len(), any::<bool>()).prop_map(|(i, dotted)| {
            if dotted {
                format!("{}.1", POOL[i])
            } else {
                POOL[i].to_string()
            }
        }),
        0..8,
    )
}

proptest! {
    #[test]
    fn prop_clean_up_idempotent(
        rows in prop::collection::vec(row_strategy(), 0..16),
        keep in any::<bool>(),
    ) {
        let once = clean_up(rows, keep);
        let twice = clean_up(once.table.clone(), keep);
        prop_assert_eq!(&once.table, &twice.table);
        prop_assert!(twice.unaccepted.is_empty());
    }

    #[test]
    fn prop_changed_invariant_holds(
        records in lookup_strategy(),
        input in input_strategy(),
        keep in any::<bool>(),
    ) {
        let lookup = TableLookup::new("prop", records);
        let pipeline = ManipulationPipeline::select(&["identity", "dot_to_dash", "discard_after_dot"]).unwrap();
        let outcome = MatchResolver::new(&lookup, keep).resolve(&input, &pipeline).unwrap();
        for row in &outcome.table {
            let expected = row.resolution.is_some()
                && row.approved_symbol.as_deref() != Some(row.original.as_str());
            prop_assert_eq!(row.changed, expected);
            prop_assert!(input.contains(&row.original));
        }
    }

    #[test]
    fn prop_resolution_deterministic(
        records in lookup_strategy(),
        input in input_strategy(),
    ) {
        let lookup = TableLookup::new("prop", records);
        let pipeline = ManipulationPipeline::select(&["identity", "discard_after_dot"]).unwrap();
        let resolver = MatchResolver::new(&lookup, false);
        let first = resolver.resolve(&input, &pipeline).unwrap();
        let second = resolver.resolve(&input, &pipeline).unwrap();
        prop_assert_eq!(first.table, second.table);
        prop_assert_eq!(first.stats, second.stats);
    }
}
