//! Merge decisions over a normalized graph.

pub mod aggregate;
mod reasons;
pub mod unapproved;
