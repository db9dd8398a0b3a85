//! # genesym-matching
//!
//! Maps raw gene symbols to authoritative entries: an ordered pipeline of
//! string manipulations, one lookup round per manipulation, then clean-up
//! and alias disambiguation of the resulting match table.

pub mod manipulation;
pub mod resolver;
pub mod table_lookup;

pub use manipulation::{Manipulation, ManipulationPipeline};
pub use resolver::{MatchOutcome, MatchResolver};
pub use table_lookup::TableLookup;
