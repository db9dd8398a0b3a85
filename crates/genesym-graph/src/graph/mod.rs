pub mod builder;
pub mod normalize;
pub mod resolution_graph;
