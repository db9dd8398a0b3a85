//! Clean-up of raw match rows: spurious manipulation flags, self-aliases,
//! duplicates, then alias disambiguation.

use std::collections::HashSet;

use genesym_core::constants::IDENTITY;
use genesym_core::models::MatchRecord;

use super::aliases;

/// What the clean-up removed or rewrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupCounts {
    pub manipulation_dropped: usize,
    pub alias_promoted_approved: usize,
    pub alias_removed_duplicate: usize,
    pub alias_multiple_kept: usize,
    pub alias_multiple_discarded: usize,
}

/// Match rows after clean-up.
#[derive(Debug, Clone, Default)]
pub struct CleanedMatches {
    /// Approved, previous, accepted-alias, fallback, and unmatched rows.
    pub table: Vec<MatchRecord>,
    /// Alias rows of symbols with several alias targets, when not kept, and
    /// alias rows of symbols that had another alias discarded.
    pub unaccepted: Vec<MatchRecord>,
    pub counts: CleanupCounts,
}

/// Clean raw match rows. Running it again on its own `table` changes nothing.
pub fn clean_up(mut rows: Vec<MatchRecord>, keep_gene_multiple_aliases: bool) -> CleanedMatches {
    let mut counts = CleanupCounts::default();

    // A manipulation other than identity that lands back on the original
    // symbol is an artifact of the round ordering.
    let before = rows.len();
    rows.retain(|row| !(row.is_manipulated() && !row.changed));
    counts.manipulation_dropped = before - rows.len();

    // A manipulation that did not alter the string was really identity.
    for row in rows.iter_mut() {
        if row.is_manipulated() && row.input == row.original {
            row.resolution = Some(IDENTITY.to_string());
            row.recompute_changed();
        }
    }
    aliases::promote_self_aliases(&mut rows, &mut counts);
    dedup_in_order(&mut rows);

    let (table, unaccepted) = aliases::disambiguate(rows, keep_gene_multiple_aliases, &mut counts);
    CleanedMatches {
        table,
        unaccepted,
        counts,
    }
}

fn dedup_in_order(rows: &mut Vec<MatchRecord>) {
    let mut seen = HashSet::new();
    rows.retain(|row| seen.insert(row.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use genesym_core::models::MatchType;

    #[test]
    fn drops_manipulations_that_change_nothing() {
        let rows = vec![
            MatchRecord::matched("A.1", "dot_to_dash", "A-1", "A.1", MatchType::Approved, None),
            MatchRecord::matched("B.1", "dot_to_dash", "B-1", "B-1", MatchType::Approved, None),
        ];
        let cleaned = clean_up(rows, false);
        assert_eq!(cleaned.counts.manipulation_dropped, 1);
        assert_eq!(cleaned.table.len(), 1);
        assert_eq!(cleaned.table[0].original, "B.1");
    }

    #[test]
    fn reflags_noop_manipulations_as_identity() {
        let rows = vec![MatchRecord::matched(
            "COX1",
            "dot_to_dash",
            "COX1",
            "MT-CO1",
            MatchType::Previous,
            None,
        )];
        let cleaned = clean_up(rows, false);
        assert!(cleaned.table[0].is_identity());
        assert!(cleaned.table[0].changed);
    }

    #[test]
    fn removes_duplicate_rows() {
        let row = MatchRecord::matched("TP53", IDENTITY, "TP53", "TP53", MatchType::Approved, None);
        let cleaned = clean_up(vec![row.clone(), row], false);
        assert_eq!(cleaned.table.len(), 1);
    }
}
