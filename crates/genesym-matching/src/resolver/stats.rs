use std::collections::{BTreeMap, BTreeSet};

use genesym_core::models::{MatchRecord, MatchStats, MatchType};

use super::cleanup::CleanupCounts;

/// Summarize a cleaned match table.
pub fn compute_stats(
    n_input_genes: usize,
    table: &[MatchRecord],
    counts: &CleanupCounts,
    manipulation_names: &[&str],
) -> MatchStats {
    let distinct = |match_type: MatchType| {
        table
            .iter()
            .filter(|r| r.match_type == match_type)
            .map(|r| r.original.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    };

    let mut stats = MatchStats {
        n_input_genes,
        n_approved_symbol: distinct(MatchType::Approved),
        n_previous_symbol: distinct(MatchType::Previous),
        n_alias_symbol: distinct(MatchType::Alias),
        n_unmatched: distinct(MatchType::Unmatched),
        n_alias_promoted_approved: counts.alias_promoted_approved,
        n_alias_removed_duplicate: counts.alias_removed_duplicate,
        n_alias_multiple_kept: counts.alias_multiple_kept,
        n_alias_multiple_discarded: counts.alias_multiple_discarded,
        n_manipulation_dropped: counts.manipulation_dropped,
        ..Default::default()
    };

    let mut changed: BTreeMap<&str, BTreeSet<&str>> = manipulation_names
        .iter()
        .map(|name| (*name, BTreeSet::new()))
        .collect();
    for row in table.iter().filter(|r| r.changed) {
        if let Some(resolution) = &row.resolution {
            changed
                .entry(resolution.as_str())
                .or_default()
                .insert(row.original.as_str());
        }
    }
    stats.changed_by_resolution = changed
        .into_iter()
        .map(|(name, originals)| (name.to_string(), originals.len()))
        .collect();
    stats
}
