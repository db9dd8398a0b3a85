//! Output of one unification run.

use std::collections::BTreeMap;

use genesym_core::errors::GenesymResult;
use genesym_core::models::{ChangeRecord, MatchRecord, MatchStats, SampleId};
use genesym_graph::{NormalizeResult, ResolutionGraph};

/// Everything a run produced. The graph is the final, resolved state.
#[derive(Debug, Clone)]
pub struct UnificationResult {
    pub graph: ResolutionGraph,
    /// Cleaned match table the graph was built from.
    pub table: Vec<MatchRecord>,
    /// Alias rows excluded as ambiguous.
    pub unaccepted: Vec<MatchRecord>,
    /// All change records in emission order: unapproved resolution first,
    /// then aggregation.
    pub changes: Vec<ChangeRecord>,
    /// Records per input sample, every sample present even with no records.
    pub sample_changes: BTreeMap<SampleId, Vec<ChangeRecord>>,
    pub stats: MatchStats,
    pub normalized: NormalizeResult,
}

impl UnificationResult {
    /// Node-level conflicts, attributed to no sample.
    pub fn unattributed(&self) -> Vec<&ChangeRecord> {
        self.changes.iter().filter(|c| c.sample.is_none()).collect()
    }

    /// Records of one sample; empty for unknown samples.
    pub fn changes_for(&self, sample: &str) -> &[ChangeRecord] {
        self.sample_changes
            .get(sample)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn conflict_count(&self) -> usize {
        self.changes.iter().filter(|c| c.is_conflict()).count()
    }

    /// blake3 hash of the serialized change records and statistics.
    /// Equal inputs give equal fingerprints.
    pub fn fingerprint(&self) -> GenesymResult<String> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(serde_json::to_string(&self.changes)?.as_bytes());
        hasher.update(serde_json::to_string(&self.stats)?.as_bytes());
        Ok(hasher.finalize().to_hex().to_string())
    }
}

/// Split records by sample, keeping emission order.
pub(crate) fn split_by_sample<'a, I>(
    sample_ids: I,
    changes: &[ChangeRecord],
) -> BTreeMap<SampleId, Vec<ChangeRecord>>
where
    I: IntoIterator<Item = &'a SampleId>,
{
    let mut split: BTreeMap<SampleId, Vec<ChangeRecord>> = sample_ids
        .into_iter()
        .map(|sample| (sample.clone(), Vec::new()))
        .collect();
    for change in changes {
        if let Some(sample) = &change.sample {
            split.entry(sample.clone()).or_default().push(change.clone());
        }
    }
    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use genesym_core::models::ChangeAction;

    fn result_with(changes: Vec<ChangeRecord>) -> UnificationResult {
        let samples = ["s1".to_string(), "s2".to_string()];
        UnificationResult {
            graph: ResolutionGraph::new(),
            table: Vec::new(),
            unaccepted: Vec::new(),
            sample_changes: split_by_sample(samples.iter(), &changes),
            changes,
            stats: MatchStats::default(),
            normalized: NormalizeResult::default(),
        }
    }

    #[test]
    fn split_keeps_every_sample() {
        let result = result_with(vec![
            ChangeRecord::transfer("s1", ChangeAction::Rename, "A", "B", "r".into()),
            ChangeRecord::node_conflict("C", "ambiguous".into()),
        ]);
        assert_eq!(result.changes_for("s1").len(), 1);
        assert!(result.changes_for("s2").is_empty());
        assert!(result.changes_for("s9").is_empty());
        assert_eq!(result.unattributed().len(), 1);
        assert_eq!(result.conflict_count(), 1);
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = result_with(vec![ChangeRecord::transfer(
            "s1",
            ChangeAction::Rename,
            "A",
            "B",
            "r".into(),
        )]);
        let b = result_with(vec![ChangeRecord::transfer(
            "s1",
            ChangeAction::Copy,
            "A",
            "B",
            "r".into(),
        )]);
        assert_eq!(a.fingerprint().unwrap(), a.clone().fingerprint().unwrap());
        assert_ne!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
        assert_eq!(a.fingerprint().unwrap().len(), 64);
    }
}
