//! Match Resolver: lookup rounds → clean-up → alias disambiguation → statistics.

pub mod aliases;
pub mod cleanup;
pub mod rounds;
pub mod stats;

use std::collections::BTreeSet;

use genesym_core::errors::GenesymResult;
use genesym_core::models::{MatchRecord, MatchStats, Symbol};
use genesym_core::traits::ISymbolLookup;
use tracing::info;

use crate::manipulation::ManipulationPipeline;

pub use cleanup::{clean_up, CleanedMatches, CleanupCounts};

/// Final output of match resolution.
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    /// Approved, previous, accepted-alias, fallback, and unmatched rows.
    pub table: Vec<MatchRecord>,
    /// Ambiguous alias rows excluded from the table.
    pub unaccepted: Vec<MatchRecord>,
    pub stats: MatchStats,
}

/// Drives the manipulation pipeline and the lookup across rounds.
pub struct MatchResolver<'a> {
    lookup: &'a dyn ISymbolLookup,
    keep_gene_multiple_aliases: bool,
}

impl<'a> MatchResolver<'a> {
    pub fn new(lookup: &'a dyn ISymbolLookup, keep_gene_multiple_aliases: bool) -> Self {
        Self {
            lookup,
            keep_gene_multiple_aliases,
        }
    }

    /// Resolve distinct raw symbols. Issues at most one lookup call per
    /// manipulation; a lookup failure aborts the whole batch.
    pub fn resolve(
        &self,
        symbols: &BTreeSet<Symbol>,
        pipeline: &ManipulationPipeline,
    ) -> GenesymResult<MatchOutcome> {
        let rows = rounds::run_rounds(symbols, pipeline, self.lookup)?;
        let cleaned = clean_up(rows, self.keep_gene_multiple_aliases);
        let stats = stats::compute_stats(
            symbols.len(),
            &cleaned.table,
            &cleaned.counts,
            &pipeline.names(),
        );

        info!(
            input = stats.n_input_genes,
            approved = stats.n_approved_symbol,
            previous = stats.n_previous_symbol,
            alias = stats.n_alias_symbol,
            unmatched = stats.n_unmatched,
            unaccepted = cleaned.unaccepted.len(),
            "match resolution complete"
        );

        Ok(MatchOutcome {
            table: cleaned.table,
            unaccepted: cleaned.unaccepted,
            stats,
        })
    }

    /// Select manipulations by name, then resolve. Unknown names fail before
    /// any lookup call.
    pub fn resolve_with<S: AsRef<str>>(
        &self,
        symbols: &BTreeSet<Symbol>,
        manipulations: &[S],
    ) -> GenesymResult<MatchOutcome> {
        let pipeline = ManipulationPipeline::select(manipulations)?;
        self.resolve(symbols, &pipeline)
    }
}
