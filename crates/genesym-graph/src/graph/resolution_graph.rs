//! ResolutionGraph: a StableGraph with a symbol → NodeIndex index.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Direction;
use serde::{Deserialize, Serialize};

use genesym_core::errors::GraphError;
use genesym_core::models::match_type::capitalize;
use genesym_core::models::{MatchType, SampleId, Symbol};

/// Role of a symbol in the graph. Ordered by precedence: a string that plays
/// several roles keeps the highest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// Post-manipulation candidate string.
    Input,
    /// Raw symbol as it appeared in the samples.
    Original,
    /// Authoritative symbol.
    ApprovedSymbol,
}

/// Node payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolNode {
    pub symbol: Symbol,
    pub kind: NodeKind,
    pub samples: BTreeSet<SampleId>,
}

/// Edge payload: the manipulation or the match type that links two symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// `original → input`, named after the manipulation.
    Manipulation(String),
    /// `input → approvedSymbol`.
    Match(MatchType),
}

impl EdgeKind {
    /// Readable label for change reasons, e.g. "Dot to dash" or "Previous symbol".
    pub fn label(&self) -> String {
        match self {
            Self::Manipulation(name) => capitalize(&name.replace('_', " ")),
            Self::Match(match_type) => match_type.label(),
        }
    }
}

pub type SymbolStableGraph = StableGraph<SymbolNode, EdgeKind>;

/// Exactly one node per distinct string.
///
/// Nodes are only added while building; removals never precede additions,
/// so `NodeIndex` order is insertion order.
#[derive(Debug, Clone)]
pub struct ResolutionGraph {
    pub graph: SymbolStableGraph,
    /// Map from symbol → NodeIndex for O(1) lookup.
    pub node_index: HashMap<Symbol, NodeIndex>,
}

impl ResolutionGraph {
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Get or create the node for `symbol`, raising its kind to `kind` if higher.
    pub fn ensure_node(&mut self, symbol: &str, kind: NodeKind) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(symbol) {
            if let Some(node) = self.graph.node_weight_mut(idx) {
                node.kind = node.kind.max(kind);
            }
            return idx;
        }
        let idx = self.graph.add_node(SymbolNode {
            symbol: symbol.to_string(),
            kind,
            samples: BTreeSet::new(),
        });
        self.node_index.insert(symbol.to_string(), idx);
        idx
    }

    pub fn get_node(&self, symbol: &str) -> Option<NodeIndex> {
        self.node_index.get(symbol).copied()
    }

    /// The node payload for `symbol`.
    pub fn node(&self, symbol: &str) -> Result<&SymbolNode, GraphError> {
        self.get_node(symbol)
            .and_then(|idx| self.graph.node_weight(idx))
            .ok_or_else(|| GraphError::NodeNotFound {
                symbol: symbol.to_string(),
            })
    }

    /// Sample membership of `symbol`.
    pub fn samples(&self, symbol: &str) -> Result<&BTreeSet<SampleId>, GraphError> {
        self.node(symbol).map(|node| &node.samples)
    }

    /// Add samples to the membership of the node at `idx`.
    pub fn add_samples<I>(&mut self, idx: NodeIndex, samples: I)
    where
        I: IntoIterator<Item = SampleId>,
    {
        if let Some(node) = self.graph.node_weight_mut(idx) {
            node.samples.extend(samples);
        }
    }

    pub(crate) fn weight(&self, idx: NodeIndex) -> &SymbolNode {
        &self.graph[idx]
    }

    pub(crate) fn weight_mut(&mut self, idx: NodeIndex) -> &mut SymbolNode {
        &mut self.graph[idx]
    }

    /// Insert or replace the edge `source → target`.
    pub fn update_edge(&mut self, source: NodeIndex, target: NodeIndex, kind: EdgeKind) {
        self.graph.update_edge(source, target, kind);
    }

    /// Distinct successors, in insertion order.
    pub fn successors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.neighbors(idx, Direction::Outgoing)
    }

    /// Distinct predecessors, in insertion order.
    pub fn predecessors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.neighbors(idx, Direction::Incoming)
    }

    fn neighbors(&self, idx: NodeIndex, direction: Direction) -> Vec<NodeIndex> {
        let mut out: Vec<NodeIndex> = self.graph.neighbors_directed(idx, direction).collect();
        out.sort();
        out.dedup();
        out
    }

    /// The kind of the edge `source → target`, if any.
    pub fn edge_kind(&self, source: NodeIndex, target: NodeIndex) -> Option<&EdgeKind> {
        self.graph
            .find_edge(source, target)
            .and_then(|edge| self.graph.edge_weight(edge))
    }

    /// Remove a node and all its edges.
    pub fn remove_node(&mut self, symbol: &str) -> bool {
        if let Some(idx) = self.node_index.remove(symbol) {
            self.graph.remove_node(idx);
            true
        } else {
            false
        }
    }

    /// Live node indices in insertion order.
    pub fn node_indices(&self) -> Vec<NodeIndex> {
        let mut indices: Vec<NodeIndex> = self.graph.node_indices().collect();
        indices.sort();
        indices
    }

    /// Every node's symbol and membership, keyed by symbol.
    pub fn membership(&self) -> BTreeMap<Symbol, BTreeSet<SampleId>> {
        self.graph
            .node_indices()
            .map(|idx| {
                let node = &self.graph[idx];
                (node.symbol.clone(), node.samples.clone())
            })
            .collect()
    }

    /// All `(source, target, kind)` edges as symbols, sorted.
    pub fn edge_list(&self) -> Vec<(Symbol, Symbol, EdgeKind)> {
        let mut edges: Vec<_> = self
            .graph
            .edge_indices()
            .filter_map(|edge| {
                let (source, target) = self.graph.edge_endpoints(edge)?;
                let kind = self.graph.edge_weight(edge)?;
                Some((
                    self.graph[source].symbol.clone(),
                    self.graph[target].symbol.clone(),
                    kind.clone(),
                ))
            })
            .collect();
        edges.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
        edges
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for ResolutionGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_node_per_string_with_highest_kind() {
        let mut graph = ResolutionGraph::new();
        let a = graph.ensure_node("MT-CO1", NodeKind::Input);
        let b = graph.ensure_node("MT-CO1", NodeKind::ApprovedSymbol);
        let c = graph.ensure_node("MT-CO1", NodeKind::Original);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.node("MT-CO1").unwrap().kind, NodeKind::ApprovedSymbol);
    }

    #[test]
    fn update_edge_keeps_one_edge_per_pair() {
        let mut graph = ResolutionGraph::new();
        let a = graph.ensure_node("A", NodeKind::Original);
        let b = graph.ensure_node("B", NodeKind::ApprovedSymbol);
        graph.update_edge(a, b, EdgeKind::Match(MatchType::Alias));
        graph.update_edge(a, b, EdgeKind::Match(MatchType::Previous));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_kind(a, b), Some(&EdgeKind::Match(MatchType::Previous)));
        assert_eq!(graph.successors(a), vec![b]);
        assert_eq!(graph.predecessors(b), vec![a]);
    }

    #[test]
    fn remove_node_drops_incident_edges() {
        let mut graph = ResolutionGraph::new();
        let a = graph.ensure_node("A", NodeKind::Original);
        let b = graph.ensure_node("B", NodeKind::ApprovedSymbol);
        graph.update_edge(a, b, EdgeKind::Manipulation("dot_to_dash".into()));
        assert!(graph.remove_node("A"));
        assert!(!graph.remove_node("A"));
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.predecessors(b).is_empty());
        assert!(matches!(
            graph.samples("A"),
            Err(GraphError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn edge_labels_are_readable() {
        assert_eq!(
            EdgeKind::Manipulation("discard_after_dot".into()).label(),
            "Discard after dot"
        );
        assert_eq!(EdgeKind::Match(MatchType::Previous).label(), "Previous symbol");
    }
}
