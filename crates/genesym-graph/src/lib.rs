//! # genesym-graph
//!
//! The resolution graph connects raw symbols, their manipulated forms, and
//! authoritative symbols, annotated with sample membership. Stages mutate it
//! in order: build, normalize, resolve unapproved nodes, and optionally
//! aggregate approved nodes. Resolution stages return append-only change
//! records.

pub mod graph;
pub mod resolve;

pub use graph::builder::build_graph;
pub use graph::normalize::{normalize, remove_loose_ends, remove_self_edges, NormalizeResult};
pub use graph::resolution_graph::{EdgeKind, NodeKind, ResolutionGraph, SymbolNode};
pub use resolve::aggregate::aggregate_approved;
pub use resolve::unapproved::resolve_unapproved;
