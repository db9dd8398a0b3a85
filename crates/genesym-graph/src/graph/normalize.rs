//! Trim degenerate structure: self-loops and sample-less authoritative chains.

use petgraph::stable_graph::EdgeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use tracing::debug;

use super::resolution_graph::{NodeKind, ResolutionGraph};

/// Result of a normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeResult {
    pub self_edges_removed: usize,
    pub loose_ends_removed: usize,
}

/// Run both passes. Idempotent.
pub fn normalize(graph: &mut ResolutionGraph) -> NormalizeResult {
    let result = NormalizeResult {
        self_edges_removed: remove_self_edges(graph),
        loose_ends_removed: remove_loose_ends(graph),
    };
    debug!(
        self_edges = result.self_edges_removed,
        loose_ends = result.loose_ends_removed,
        "graph normalized"
    );
    result
}

/// Remove every edge from a node to itself.
pub fn remove_self_edges(graph: &mut ResolutionGraph) -> usize {
    let loops: Vec<EdgeIndex> = graph
        .graph
        .edge_indices()
        .filter(|&idx| {
            graph
                .graph
                .edge_endpoints(idx)
                .is_some_and(|(source, target)| source == target)
        })
        .collect();

    let count = loops.len();
    for idx in loops {
        graph.graph.remove_edge(idx);
    }
    count
}

/// For every sample-less authoritative node whose only incoming edge comes
/// from another authoritative node, remove that edge.
pub fn remove_loose_ends(graph: &mut ResolutionGraph) -> usize {
    let loose: Vec<EdgeIndex> = graph
        .node_indices()
        .into_iter()
        .filter(|&idx| {
            let node = graph.weight(idx);
            node.kind == NodeKind::ApprovedSymbol && node.samples.is_empty()
        })
        .filter_map(|idx| {
            let mut incoming = graph.graph.edges_directed(idx, Direction::Incoming);
            let edge = incoming.next()?;
            if incoming.next().is_some() {
                return None;
            }
            (graph.weight(edge.source()).kind == NodeKind::ApprovedSymbol).then(|| edge.id())
        })
        .collect();

    let count = loose.len();
    for idx in loose {
        graph.graph.remove_edge(idx);
    }
    count
}
