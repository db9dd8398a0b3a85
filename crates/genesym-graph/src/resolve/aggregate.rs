//! Approved aggregation: copy samples of predecessors into authoritative nodes
//! when that materially increases coverage. One hop only.

use std::collections::BTreeSet;

use petgraph::stable_graph::NodeIndex;
use tracing::{info, warn};

use genesym_core::models::{ChangeAction, ChangeRecord, SampleId};

use super::reasons;
use crate::graph::resolution_graph::{NodeKind, ResolutionGraph};

/// Label used in aggregation reasons.
const AGGREGATION: &str = "Aggregation";

/// Aggregate every authoritative node whose coverage gain
/// `|own ∪ predecessors| / |largest single set|` reaches `ratio`.
///
/// Marks are computed before any merge. A marked predecessor of a marked node
/// is not merged; one node-level `conflict` names all of them.
pub fn aggregate_approved(
    graph: &mut ResolutionGraph,
    ratio: f64,
    report_shared_samples: bool,
) -> Vec<ChangeRecord> {
    let marks: Vec<NodeIndex> = graph
        .node_indices()
        .into_iter()
        .filter(|&idx| is_mark(graph, idx, ratio))
        .collect();
    let marked: BTreeSet<NodeIndex> = marks.iter().copied().collect();

    let mut changes = Vec::new();
    for &mark in &marks {
        let predecessors = graph.predecessors(mark);
        let (chained, direct): (Vec<NodeIndex>, Vec<NodeIndex>) = predecessors
            .into_iter()
            .partition(|idx| marked.contains(idx));

        let new = graph.weight(mark).symbol.clone();
        if !chained.is_empty() {
            let names: Vec<&str> = chained
                .iter()
                .map(|&idx| graph.weight(idx).symbol.as_str())
                .collect();
            warn!(symbol = %new, chained = ?names, "two-level aggregation skipped");
            changes.push(ChangeRecord::node_conflict(
                &new,
                reasons::two_level_aggregation(&new, &names),
            ));
        }

        for predecessor in direct {
            let symbol = graph.weight(predecessor).symbol.clone();
            let samples: BTreeSet<SampleId> = graph.weight(predecessor).samples.clone();
            for sample in &samples {
                if graph.weight(mark).samples.contains(sample) {
                    if report_shared_samples {
                        changes.push(ChangeRecord::sample_conflict(
                            sample,
                            &symbol,
                            &new,
                            reasons::shared_sample(&symbol, &new, sample),
                        ));
                    }
                    continue;
                }
                changes.push(ChangeRecord::transfer(
                    sample,
                    ChangeAction::Copy,
                    &symbol,
                    &new,
                    reasons::transfer(AGGREGATION, ChangeAction::Copy, &symbol, &new, sample),
                ));
                graph.weight_mut(mark).samples.insert(sample.clone());
            }
        }
    }

    info!(
        marked = marks.len(),
        records = changes.len(),
        "approved aggregation complete"
    );
    changes
}

fn is_mark(graph: &ResolutionGraph, idx: NodeIndex, ratio: f64) -> bool {
    let node = graph.weight(idx);
    if node.kind != NodeKind::ApprovedSymbol {
        return false;
    }
    let predecessors = graph.predecessors(idx);
    if predecessors.is_empty() {
        return false;
    }

    let mut union: BTreeSet<&SampleId> = node.samples.iter().collect();
    let mut largest = node.samples.len();
    for predecessor in predecessors {
        let samples = &graph.weight(predecessor).samples;
        union.extend(samples.iter());
        largest = largest.max(samples.len());
    }
    if union.is_empty() || largest == 0 {
        return false;
    }
    union.len() as f64 / largest as f64 >= ratio
}
