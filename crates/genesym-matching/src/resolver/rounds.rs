//! Lookup rounds: one batch call per manipulation, over still-unresolved symbols.

use std::collections::{BTreeMap, BTreeSet};

use genesym_core::errors::GenesymResult;
use genesym_core::models::{MatchRecord, Symbol};
use genesym_core::traits::ISymbolLookup;
use tracing::debug;

use crate::manipulation::ManipulationPipeline;

/// Run every manipulation round and return the raw match rows, sorted by
/// original symbol. Symbols no round resolves end as `unmatched` rows.
pub fn run_rounds(
    symbols: &BTreeSet<Symbol>,
    pipeline: &ManipulationPipeline,
    lookup: &dyn ISymbolLookup,
) -> GenesymResult<Vec<MatchRecord>> {
    let mut unresolved: BTreeSet<&str> = symbols.iter().map(String::as_str).collect();
    let mut rows = Vec::new();

    for manipulation in pipeline.steps() {
        if unresolved.is_empty() {
            break;
        }

        // Candidate string → the originals it was derived from.
        let mut candidates: BTreeMap<String, Vec<&str>> = BTreeMap::new();
        for &symbol in &unresolved {
            candidates
                .entry(manipulation.apply(symbol))
                .or_default()
                .push(symbol);
        }
        let batch: Vec<String> = candidates.keys().cloned().collect();
        let response = lookup.lookup(&batch)?;

        let mut resolved: BTreeSet<&str> = BTreeSet::new();
        for record in &response {
            let Some((approved, match_type)) = record.resolved() else {
                continue;
            };
            let Some(originals) = candidates.get(&record.input) else {
                continue;
            };
            for &original in originals {
                rows.push(MatchRecord::matched(
                    original,
                    manipulation.name,
                    &record.input,
                    approved,
                    match_type,
                    record.location.clone(),
                ));
                resolved.insert(original);
            }
        }

        debug!(
            round = manipulation.name,
            lookup = lookup.name(),
            candidates = batch.len(),
            resolved = resolved.len(),
            "match round complete"
        );
        unresolved.retain(|symbol| !resolved.contains(symbol));
    }

    rows.extend(unresolved.into_iter().map(MatchRecord::unmatched));
    rows.sort_by(|a, b| a.original.cmp(&b.original));
    Ok(rows)
}
