use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Counters describing one match resolution run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    /// Distinct symbols submitted.
    pub n_input_genes: usize,
    /// Distinct symbols with at least one row of the given kind in the final table.
    pub n_approved_symbol: usize,
    pub n_previous_symbol: usize,
    pub n_alias_symbol: usize,
    pub n_unmatched: usize,
    /// Alias rows whose target was the symbol itself.
    pub n_alias_promoted_approved: usize,
    /// Alias rows dropped because the target is approved elsewhere in the data.
    pub n_alias_removed_duplicate: usize,
    /// Symbols with several alias targets, kept unchanged.
    pub n_alias_multiple_kept: usize,
    /// Symbols with several alias targets, excluded from the table.
    pub n_alias_multiple_discarded: usize,
    /// Manipulated rows dropped because they changed nothing.
    pub n_manipulation_dropped: usize,
    /// Distinct changed symbols per resolution name.
    pub changed_by_resolution: BTreeMap<String, usize>,
}

impl MatchStats {
    /// Flatten into named counters, e.g. `n_changed_dot_to_dash`.
    pub fn counters(&self) -> BTreeMap<String, usize> {
        let mut counters: BTreeMap<String, usize> = [
            (N_INPUT_GENES, self.n_input_genes),
            (N_APPROVED_SYMBOL, self.n_approved_symbol),
            (N_PREVIOUS_SYMBOL, self.n_previous_symbol),
            (N_ALIAS_SYMBOL, self.n_alias_symbol),
            (N_UNMATCHED, self.n_unmatched),
            (N_ALIAS_PROMOTED_APPROVED, self.n_alias_promoted_approved),
            (N_ALIAS_REMOVED_DUPLICATE, self.n_alias_removed_duplicate),
            (N_ALIAS_MULTIPLE_KEPT, self.n_alias_multiple_kept),
            (N_ALIAS_MULTIPLE_DISCARDED, self.n_alias_multiple_discarded),
            (N_MANIPULATION_DROPPED, self.n_manipulation_dropped),
        ]
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();

        for (resolution, count) in &self.changed_by_resolution {
            counters.insert(format!("{N_CHANGED_PREFIX}{resolution}"), *count);
        }
        counters
    }
}
