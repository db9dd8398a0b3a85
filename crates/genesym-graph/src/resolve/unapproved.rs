//! Merge every non-authoritative node into at most one authoritative successor.

use std::collections::{BTreeSet, HashMap};

use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;
use tracing::{debug, info, warn};

use genesym_core::models::{ChangeAction, ChangeRecord};

use super::reasons;
use crate::graph::resolution_graph::{NodeKind, ResolutionGraph};

/// Resolve all non-authoritative nodes. Nodes are visited sources first (a raw
/// symbol before its manipulated form), ties broken by insertion order.
///
/// A sample already present in the target is never transferred; it yields a
/// `conflict` record only when `report_shared_samples` is set.
pub fn resolve_unapproved(
    graph: &mut ResolutionGraph,
    report_shared_samples: bool,
) -> Vec<ChangeRecord> {
    let mut changes = Vec::new();
    let mut merged = 0;
    let mut ambiguous = 0;

    for idx in visiting_order(graph) {
        if !graph.graph.contains_node(idx) || graph.weight(idx).kind == NodeKind::ApprovedSymbol {
            continue;
        }
        match merge_target(graph, idx) {
            Target::None => {}
            Target::Ambiguous(live) => {
                ambiguous += 1;
                changes.push(ambiguity_conflict(graph, idx, &live));
            }
            Target::One(target) => {
                merge_into(graph, idx, target, report_shared_samples, &mut changes);
                merged += 1;
            }
        }
    }

    info!(
        merged,
        ambiguous,
        records = changes.len(),
        "unapproved resolution complete"
    );
    changes
}

enum Target {
    None,
    One(NodeIndex),
    Ambiguous(Vec<NodeIndex>),
}

fn merge_target(graph: &ResolutionGraph, idx: NodeIndex) -> Target {
    let successors = graph.successors(idx);
    match successors.as_slice() {
        [] => Target::None,
        [only] => Target::One(*only),
        _ => {
            let live: Vec<NodeIndex> = successors
                .iter()
                .copied()
                .filter(|&s| !graph.weight(s).samples.is_empty())
                .collect();
            match live.len() {
                0 => {
                    debug!(symbol = %graph.weight(idx).symbol, "no successor carries samples, skipping");
                    Target::None
                }
                1 => Target::One(live[0]),
                _ => Target::Ambiguous(live),
            }
        }
    }
}

fn ambiguity_conflict(graph: &ResolutionGraph, idx: NodeIndex, live: &[NodeIndex]) -> ChangeRecord {
    let node = graph.weight(idx);
    let candidates: Vec<(&str, &BTreeSet<String>)> = live
        .iter()
        .map(|&s| {
            let candidate = graph.weight(s);
            (candidate.symbol.as_str(), &candidate.samples)
        })
        .collect();
    warn!(
        symbol = %node.symbol,
        candidates = ?candidates.iter().map(|(c, _)| *c).collect::<Vec<_>>(),
        "several live successors, leaving symbol unresolved"
    );
    ChangeRecord::node_conflict(
        &node.symbol,
        reasons::multiple_live_successors(&node.symbol, &node.samples, &candidates),
    )
}

fn merge_into(
    graph: &mut ResolutionGraph,
    idx: NodeIndex,
    target: NodeIndex,
    report_shared_samples: bool,
    changes: &mut Vec<ChangeRecord>,
) {
    let label = graph
        .edge_kind(idx, target)
        .map(|kind| kind.label())
        .unwrap_or_default();
    let symbol = graph.weight(idx).symbol.clone();
    let new = graph.weight(target).symbol.clone();
    let samples = graph.weight(idx).samples.clone();

    let action = if samples.is_disjoint(&graph.weight(target).samples) {
        ChangeAction::Rename
    } else {
        ChangeAction::Copy
    };

    for sample in &samples {
        if graph.weight(target).samples.contains(sample) {
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
            action,
            &symbol,
            &new,
            reasons::transfer(&label, action, &symbol, &new, sample),
        ));
        graph.weight_mut(target).samples.insert(sample.clone());
    }

    if graph
        .weight(idx)
        .samples
        .is_subset(&graph.weight(target).samples)
    {
        debug!(symbol = %symbol, into = %new, "node merged");
        graph.remove_node(&symbol);
    }
}

/// Topological order with insertion-order tie-breaking. Nodes on cycles,
/// which never become sources, follow in insertion order.
fn visiting_order(graph: &ResolutionGraph) -> Vec<NodeIndex> {
    let nodes = graph.node_indices();
    let mut in_degree: HashMap<NodeIndex, usize> = nodes
        .iter()
        .map(|&idx| (idx, graph.predecessors(idx).len()))
        .collect();
    let mut ready: BTreeSet<NodeIndex> = nodes
        .iter()
        .copied()
        .filter(|idx| in_degree.get(idx) == Some(&0))
        .collect();

    let mut order = Vec::with_capacity(nodes.len());
    while let Some(idx) = ready.pop_first() {
        order.push(idx);
        for next in graph.graph.neighbors_directed(idx, Direction::Outgoing) {
            if let Some(degree) = in_degree.get_mut(&next) {
                *degree = degree.saturating_sub(1);
                if *degree == 0 {
                    ready.insert(next);
                }
            }
        }
    }

    if order.len() < nodes.len() {
        let visited: BTreeSet<NodeIndex> = order.iter().copied().collect();
        order.extend(nodes.into_iter().filter(|idx| !visited.contains(idx)));
    }
    order
}
