use std::collections::{BTreeMap, BTreeSet};

/// Opaque, case-sensitive gene symbol.
pub type Symbol = String;

/// Identifier of one independent sample (dataset, file).
pub type SampleId = String;

/// Raw symbols per sample, as collected from the input datasets.
pub type SampleSymbols = BTreeMap<SampleId, Vec<Symbol>>;

/// Distinct symbols across all samples, sorted.
pub fn symbol_union(samples: &SampleSymbols) -> BTreeSet<Symbol> {
    samples
        .values()
        .flat_map(|symbols| symbols.iter().cloned())
        .collect()
}

/// For every symbol, the set of samples whose symbol list contains it.
pub fn symbol_membership(samples: &SampleSymbols) -> BTreeMap<Symbol, BTreeSet<SampleId>> {
    let mut membership: BTreeMap<Symbol, BTreeSet<SampleId>> = BTreeMap::new();
    for (sample, symbols) in samples {
        for symbol in symbols {
            membership
                .entry(symbol.clone())
                .or_default()
                .insert(sample.clone());
        }
    }
    membership
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> SampleSymbols {
        let mut samples = SampleSymbols::new();
        samples.insert("s2".into(), vec!["MT-CO1".into(), "COX1".into()]);
        samples.insert("s1".into(), vec!["COX1".into(), "COX1".into()]);
        samples
    }

    #[test]
    fn union_is_sorted_and_distinct() {
        let union: Vec<_> = symbol_union(&samples()).into_iter().collect();
        assert_eq!(union, vec!["COX1", "MT-CO1"]);
    }

    #[test]
    fn membership_collects_every_sample() {
        let membership = symbol_membership(&samples());
        assert_eq!(membership["COX1"].len(), 2);
        assert_eq!(
            membership["MT-CO1"].iter().collect::<Vec<_>>(),
            vec!["s2"]
        );
    }
}
