//! Alias disambiguation.
//!
//! Aliases are the weakest link to an authoritative symbol. They are accepted
//! only when nothing else in the data contradicts them and the symbol has a
//! single alias target.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use genesym_core::models::{MatchRecord, MatchType};
use tracing::debug;

use super::cleanup::CleanupCounts;

/// An alias of itself is the approved symbol.
pub(crate) fn promote_self_aliases(rows: &mut [MatchRecord], counts: &mut CleanupCounts) {
    for row in rows.iter_mut() {
        if row.match_type == MatchType::Alias
            && row.approved_symbol.as_deref() == Some(row.original.as_str())
        {
            row.match_type = MatchType::Approved;
            counts.alias_promoted_approved += 1;
        }
    }
}

/// Split rows into the final table and the unaccepted alias rows.
pub(crate) fn disambiguate(
    rows: Vec<MatchRecord>,
    keep_gene_multiple_aliases: bool,
    counts: &mut CleanupCounts,
) -> (Vec<MatchRecord>, Vec<MatchRecord>) {
    // Approved symbol → originals that reach it as approved or previous symbol.
    let mut authoritative: HashMap<String, HashSet<String>> = HashMap::new();
    for row in rows.iter().filter(|r| r.match_type.is_authoritative()) {
        if let Some(approved) = &row.approved_symbol {
            authoritative
                .entry(approved.clone())
                .or_default()
                .insert(row.original.clone());
        }
    }

    let approved_elsewhere = |row: &MatchRecord| {
        row.approved_symbol
            .as_ref()
            .and_then(|approved| authoritative.get(approved))
            .is_some_and(|originals| originals.iter().any(|o| *o != row.original))
    };
    // Symbols whose alias relation the data already contradicts.
    let contradicted: HashSet<String> = rows
        .iter()
        .filter(|r| r.match_type == MatchType::Alias && approved_elsewhere(r))
        .map(|r| r.original.clone())
        .collect();

    let mut table = Vec::with_capacity(rows.len());
    let mut fallbacks = Vec::new();
    let mut unaccepted = Vec::new();
    let mut alias_groups: BTreeMap<String, Vec<MatchRecord>> = BTreeMap::new();

    for row in rows {
        if row.match_type != MatchType::Alias {
            table.push(row);
            continue;
        }
        if approved_elsewhere(&row) {
            debug!(
                symbol = %row.original,
                target = ?row.approved_symbol,
                "alias target already approved elsewhere, keeping symbol"
            );
            counts.alias_removed_duplicate += 1;
            fallbacks.push(MatchRecord::identity_fallback(
                &row.original,
                MatchType::AliasDiscardedExistingApproved,
            ));
            continue;
        }
        if contradicted.contains(&row.original) {
            debug!(
                symbol = %row.original,
                target = ?row.approved_symbol,
                "sibling alias discarded, not accepting this one"
            );
            unaccepted.push(row);
            continue;
        }
        alias_groups
            .entry(row.original.clone())
            .or_default()
            .push(row);
    }

    for (original, group) in alias_groups {
        let targets: BTreeSet<&str> = group
            .iter()
            .filter_map(|r| r.approved_symbol.as_deref())
            .collect();
        if targets.len() <= 1 {
            table.extend(group);
            continue;
        }
        debug!(
            symbol = %original,
            targets = ?targets,
            keep = keep_gene_multiple_aliases,
            "alias of several approved symbols"
        );
        if keep_gene_multiple_aliases {
            counts.alias_multiple_kept += 1;
            fallbacks.push(MatchRecord::identity_fallback(
                &original,
                MatchType::AliasDiscarded,
            ));
        } else {
            counts.alias_multiple_discarded += 1;
            unaccepted.extend(group);
        }
    }

    // A fallback only stands in for symbols left without any accepted match.
    let accepted: HashSet<String> = table
        .iter()
        .filter(|r| r.match_type.is_match())
        .map(|r| r.original.clone())
        .collect();
    for fallback in fallbacks {
        if !accepted.contains(&fallback.original) && !table.contains(&fallback) {
            table.push(fallback);
        }
    }

    table.sort_by(|a, b| a.original.cmp(&b.original));
    (table, unaccepted)
}
