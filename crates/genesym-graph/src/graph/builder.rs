//! Build the resolution graph from a cleaned match table and sample membership.

use std::collections::BTreeMap;

use genesym_core::models::{symbol_membership, MatchRecord, MatchType, SampleSymbols};
use tracing::debug;

use super::resolution_graph::{EdgeKind, NodeKind, ResolutionGraph};

/// One node per distinct input, approved, and original string. Originals carry
/// the samples that list them. Identity resolutions reuse the original's node.
pub fn build_graph(table: &[MatchRecord], samples: &SampleSymbols) -> ResolutionGraph {
    let membership = symbol_membership(samples);
    let mut graph = ResolutionGraph::new();

    for row in table {
        let input = graph.ensure_node(&row.input, NodeKind::Input);
        if let Some(approved) = &row.approved_symbol {
            graph.ensure_node(approved, NodeKind::ApprovedSymbol);
        }
        let original = graph.ensure_node(&row.original, NodeKind::Original);
        if let Some(sample_ids) = membership.get(&row.original) {
            graph.add_samples(original, sample_ids.iter().cloned());
        }

        if let Some(resolution) = &row.resolution {
            if !row.is_identity() && original != input {
                graph.update_edge(original, input, EdgeKind::Manipulation(resolution.clone()));
            }
        }
    }

    // input → approvedSymbol, added one match type at a time in first-seen order.
    let mut by_match_type: Vec<(MatchType, Vec<&MatchRecord>)> = Vec::new();
    for row in table.iter().filter(|r| r.approved_symbol.is_some()) {
        match by_match_type.iter_mut().find(|(mt, _)| *mt == row.match_type) {
            Some((_, rows)) => rows.push(row),
            None => by_match_type.push((row.match_type, vec![row])),
        }
    }
    for (match_type, rows) in by_match_type {
        for row in rows {
            let (Some(input), Some(approved)) = (
                graph.get_node(&row.input),
                row.approved_symbol.as_deref().and_then(|a| graph.get_node(a)),
            ) else {
                continue;
            };
            graph.update_edge(input, approved, EdgeKind::Match(match_type));
        }
    }

    let kinds = graph
        .node_indices()
        .into_iter()
        .fold(BTreeMap::<NodeKind, usize>::new(), |mut acc, idx| {
            *acc.entry(graph.weight(idx).kind).or_default() += 1;
            acc
        });
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        kinds = ?kinds,
        "resolution graph built"
    );
    graph
}
