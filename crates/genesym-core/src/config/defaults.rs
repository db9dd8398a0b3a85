// Single source of truth for all default values.

// --- Matching ---
pub const DEFAULT_MANIPULATIONS: [&str; 3] = ["identity", "dot_to_dash", "discard_after_dot"];
pub const DEFAULT_KEEP_GENE_MULTIPLE_ALIASES: bool = false;

// --- Resolution ---
pub const DEFAULT_REPORT_SHARED_SAMPLES: bool = false;

// --- Aggregation ---
pub const DEFAULT_AGGREGATE_APPROVED: bool = false;
pub const DEFAULT_AGGREGATION_RATIO: f64 = 1.5;
