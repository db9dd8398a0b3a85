//! # genesym
//!
//! Unifies gene symbols collected from several samples into one authoritative
//! naming scheme and reports every rename, copy, and unresolved conflict per
//! sample.
//!
//! ```text
//! samples → symbol union → match resolution → resolution graph
//!         → normalize → unapproved resolution → (approved aggregation)
//!         → per-sample change records
//! ```

pub mod engine;
pub mod result;
pub mod tracing_setup;

pub use engine::UnificationEngine;
pub use result::UnificationResult;

pub use genesym_core::{
    ChangeAction, ChangeRecord, GenesymError, GenesymResult, ISymbolLookup, MatchRecord,
    MatchStats, MatchType, SampleSymbols, UnifyConfig,
};
pub use genesym_matching::TableLookup;
