//! UnificationEngine: lookup + config, runs the whole pipeline per sample collection.

use genesym_core::config::UnifyConfig;
use genesym_core::errors::GenesymResult;
use genesym_core::models::{symbol_union, SampleSymbols};
use genesym_core::traits::ISymbolLookup;
use genesym_graph::{aggregate_approved, build_graph, normalize, resolve_unapproved};
use genesym_matching::{ManipulationPipeline, MatchResolver};
use rayon::prelude::*;
use tracing::{field, info, info_span};

use crate::result::{split_by_sample, UnificationResult};

/// The main unification engine.
///
/// Configuration and manipulation names are validated at construction, so a
/// bad config never reaches the lookup.
pub struct UnificationEngine {
    lookup: Box<dyn ISymbolLookup>,
    config: UnifyConfig,
    pipeline: ManipulationPipeline,
}

impl UnificationEngine {
    /// Create an engine with the default configuration.
    pub fn new(lookup: Box<dyn ISymbolLookup>) -> GenesymResult<Self> {
        Self::with_config(lookup, UnifyConfig::default())
    }

    pub fn with_config(lookup: Box<dyn ISymbolLookup>, config: UnifyConfig) -> GenesymResult<Self> {
        config.validate()?;
        let pipeline = ManipulationPipeline::select(config.manipulations.as_slice())?;
        Ok(Self {
            lookup,
            config,
            pipeline,
        })
    }

    pub fn config(&self) -> &UnifyConfig {
        &self.config
    }

    /// Unify one collection of samples.
    ///
    /// A lookup failure aborts the run; nothing is partially applied.
    pub fn get_changes(&self, samples: &SampleSymbols) -> GenesymResult<UnificationResult> {
        let span = info_span!("genesym.unify", samples = samples.len(), symbols = field::Empty);
        let _guard = span.enter();

        let symbols = symbol_union(samples);
        span.record("symbols", symbols.len());

        let outcome = MatchResolver::new(self.lookup.as_ref(), self.config.keep_gene_multiple_aliases)
            .resolve(&symbols, &self.pipeline)?;

        let mut graph = build_graph(&outcome.table, samples);
        let normalized = normalize(&mut graph);

        let mut changes = resolve_unapproved(&mut graph, self.config.report_shared_samples);
        if self.config.aggregate_approved {
            changes.extend(aggregate_approved(
                &mut graph,
                self.config.aggregation_ratio,
                self.config.report_shared_samples,
            ));
        }

        let sample_changes = split_by_sample(samples.keys(), &changes);
        let result = UnificationResult {
            graph,
            table: outcome.table,
            unaccepted: outcome.unaccepted,
            changes,
            sample_changes,
            stats: outcome.stats,
            normalized,
        };

        info!(
            records = result.changes.len(),
            conflicts = result.conflict_count(),
            unattributed = result.unattributed().len(),
            nodes = result.graph.node_count(),
            "unification complete"
        );
        Ok(result)
    }

    /// Unify independent collections in parallel, each on its own graph.
    /// Results come back in input order; one failure does not affect the others.
    pub fn unify_collections(
        &self,
        collections: &[SampleSymbols],
    ) -> Vec<GenesymResult<UnificationResult>> {
        collections
            .par_iter()
            .map(|samples| self.get_changes(samples))
            .collect()
    }
}
