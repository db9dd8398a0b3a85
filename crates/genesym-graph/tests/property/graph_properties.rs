//! Property tests for graph resolution: membership conservation, the
//! single-decision rule, and determinism.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use genesym_core::models::{ChangeAction, ChangeRecord, MatchType};
use genesym_graph::{normalize, resolve_unapproved, EdgeKind, NodeKind, ResolutionGraph};

const SAMPLES: usize = 5;

#[derive(Debug, Clone)]
struct Shape {
    originals: Vec<Vec<usize>>,
    approved: Vec<Vec<usize>>,
    edges: Vec<(usize, usize)>,
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let members = || prop::collection::vec(prop::collection::vec(0..SAMPLES, 0..SAMPLES), 1..6);
    (members(), members()).prop_flat_map(|(originals, approved)| {
        let edges = prop::collection::vec((0..originals.len(), 0..approved.len()), 0..12);
        (Just(originals), Just(approved), edges).prop_map(|(originals, approved, edges)| Shape {
            originals,
            approved,
            edges,
        })
    })
}

fn build(shape: &Shape) -> ResolutionGraph {
    let mut graph = ResolutionGraph::new();
    for (i, members) in shape.originals.iter().enumerate() {
        let idx = graph.ensure_node(&format!("O{i}"), NodeKind::Original);
        graph.add_samples(idx, members.iter().map(|s| format!("s{s}")));
    }
    for (j, members) in shape.approved.iter().enumerate() {
        let idx = graph.ensure_node(&format!("A{j}"), NodeKind::ApprovedSymbol);
        graph.add_samples(idx, members.iter().map(|s| format!("s{s}")));
    }
    for &(i, j) in &shape.edges {
        let source = graph.get_node(&format!("O{i}")).unwrap();
        let target = graph.get_node(&format!("A{j}")).unwrap();
        graph.update_edge(source, target, EdgeKind::Match(MatchType::Previous));
    }
    normalize(&mut graph);
    graph
}

fn is_transfer(change: &ChangeRecord) -> bool {
    matches!(change.action, ChangeAction::Rename | ChangeAction::Copy)
}

proptest! {
    #[test]
    fn prop_removed_node_samples_are_conserved(shape in shape_strategy(), report in any::<bool>()) {
        let mut graph = build(&shape);
        let before = graph.membership();
        let targets: BTreeMap<String, Vec<String>> = graph
            .node_indices()
            .into_iter()
            .map(|idx| {
                let successors = graph
                    .successors(idx)
                    .into_iter()
                    .map(|s| graph.graph[s].symbol.clone())
                    .collect();
                (graph.graph[idx].symbol.clone(), successors)
            })
            .collect();

        let changes = resolve_unapproved(&mut graph, report);
        let after = graph.membership();

        for (symbol, samples) in before.iter().filter(|(s, _)| !after.contains_key(*s)) {
            prop_assert!(
                targets[symbol].iter().any(|t| samples.is_subset(&after[t])),
                "{} was removed without a target holding its samples", symbol
            );
            if report {
                for sample in samples {
                    let recorded = changes
                        .iter()
                        .any(|c| c.symbol == *symbol && c.sample.as_deref() == Some(sample.as_str()));
                    prop_assert!(recorded, "{} left sample {} without a record", symbol, sample);
                }
            }
        }
    }

    #[test]
    fn prop_several_live_successors_never_transfer(shape in shape_strategy()) {
        let graph = build(&shape);
        let ambiguous: BTreeSet<String> = graph
            .node_indices()
            .into_iter()
            .filter(|&idx| {
                graph
                    .successors(idx)
                    .iter()
                    .filter(|&&s| !graph.graph[s].samples.is_empty())
                    .count()
                    >= 2
            })
            .map(|idx| graph.graph[idx].symbol.clone())
            .collect();

        let mut graph = graph;
        let changes = resolve_unapproved(&mut graph, false);
        for change in changes.iter().filter(|c| ambiguous.contains(&c.symbol)) {
            prop_assert!(!is_transfer(change));
        }
        for symbol in &ambiguous {
            prop_assert!(graph.get_node(symbol).is_some());
        }
    }

    #[test]
    fn prop_resolution_is_deterministic(shape in shape_strategy(), report in any::<bool>()) {
        let mut first = build(&shape);
        let mut second = build(&shape);
        let a = resolve_unapproved(&mut first, report);
        let b = resolve_unapproved(&mut second, report);
        prop_assert_eq!(a, b);
        prop_assert_eq!(first.membership(), second.membership());
    }
}
