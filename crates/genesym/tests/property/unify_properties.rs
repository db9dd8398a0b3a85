//! Property tests for the full pipeline: determinism and sample bookkeeping.

use proptest::prelude::*;

use genesym::{SampleSymbols, TableLookup, UnificationEngine, UnifyConfig};
use genesym_core::models::LookupRecord;
use test_fixtures::{load_fixture, NOMENCLATURE_SNAPSHOT};

const POOL: [&str; 14] = [
    "COX1", "MT-CO1", "COX1.1", "MEG8", "SNHG23", "SNHG24", "HLA.A", "HLA-A", "MARCH1",
    "MARCHF1", "AMBI", "AMBA", "ISOA", "NOTAGENE",
];

fn engine(aggregate: bool, report: bool) -> UnificationEngine {
    let rows: Vec<LookupRecord> = load_fixture(NOMENCLATURE_SNAPSHOT);
    let config = UnifyConfig {
        aggregate_approved: aggregate,
        report_shared_samples: report,
        ..Default::default()
    };
    UnificationEngine::with_config(Box::new(TableLookup::new("snapshot", rows)), config).unwrap()
}

fn samples_strategy() -> impl Strategy<Value = SampleSymbols> {
    prop::collection::btree_map(
        (0..4usize).prop_map(|i| format!("s{i}")),
        prop::collection::vec((0..POOL.len()).prop_map(|i| POOL[i].to_string()), 0..8),
        1..4,
    )
}

fn reversed(samples: &SampleSymbols) -> SampleSymbols {
    samples
        .iter()
        .map(|(sample, symbols)| (sample.clone(), symbols.iter().rev().cloned().collect()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_runs_are_byte_identical(
        samples in samples_strategy(),
        aggregate in any::<bool>(),
        report in any::<bool>(),
    ) {
        let engine = engine(aggregate, report);
        let first = engine.get_changes(&samples).unwrap();
        let second = engine.get_changes(&reversed(&samples)).unwrap();
        prop_assert_eq!(first.fingerprint().unwrap(), second.fingerprint().unwrap());
        prop_assert_eq!(&first.changes, &second.changes);
    }

    #[test]
    fn prop_records_only_name_input_samples(samples in samples_strategy()) {
        let result = engine(true, true).get_changes(&samples).unwrap();
        prop_assert_eq!(result.sample_changes.len(), samples.len());
        for change in &result.changes {
            if let Some(sample) = &change.sample {
                prop_assert!(samples.contains_key(sample));
            }
        }
        let attributed: usize = result.sample_changes.values().map(Vec::len).sum();
        prop_assert_eq!(attributed + result.unattributed().len(), result.changes.len());
    }
}
