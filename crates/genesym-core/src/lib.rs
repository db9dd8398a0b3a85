//! # genesym-core
//!
//! Foundation crate for gene symbol unification.
//! Defines the data model, the lookup trait, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::UnifyConfig;
pub use errors::{GenesymError, GenesymResult};
pub use models::{
    ChangeAction, ChangeRecord, LookupMatch, LookupRecord, MatchRecord, MatchStats, MatchType,
    SampleId, SampleSymbols, Symbol,
};
pub use traits::ISymbolLookup;
