/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the zero-manipulation baseline.
pub const IDENTITY: &str = "identity";

/// Environment variable consulted by the tracing setup.
pub const LOG_ENV_VAR: &str = "GENESYM_LOG";

// Statistics counter names.
pub const N_INPUT_GENES: &str = "n_input_genes";
pub const N_APPROVED_SYMBOL: &str = "n_approved_symbol";
pub const N_PREVIOUS_SYMBOL: &str = "n_previous_symbol";
pub const N_ALIAS_SYMBOL: &str = "n_alias_symbol";
pub const N_UNMATCHED: &str = "n_unmatched";
pub const N_ALIAS_PROMOTED_APPROVED: &str = "n_alias_promoted_approved";
pub const N_ALIAS_REMOVED_DUPLICATE: &str = "n_alias_removed_duplicate";
pub const N_ALIAS_MULTIPLE_KEPT: &str = "n_alias_multiple_kept";
pub const N_ALIAS_MULTIPLE_DISCARDED: &str = "n_alias_multiple_discarded";
pub const N_MANIPULATION_DROPPED: &str = "n_manipulation_dropped";
/// Prefix for the per-resolution change counters, e.g. `n_changed_dot_to_dash`.
pub const N_CHANGED_PREFIX: &str = "n_changed_";
