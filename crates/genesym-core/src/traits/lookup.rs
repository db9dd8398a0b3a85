use crate::errors::GenesymResult;
use crate::models::LookupRecord;

/// Nomenclature lookup service.
///
/// Called once per manipulation round with the full batch of candidates.
/// Requests are case-insensitive and include previous symbols, aliases,
/// and unmatched rows. Transport, auth, and batching limits belong to the
/// implementation; a failure aborts the whole match resolution.
pub trait ISymbolLookup: Send + Sync {
    /// Classify every candidate. A candidate may yield zero, one, or several rows.
    fn lookup(&self, candidates: &[String]) -> GenesymResult<Vec<LookupRecord>>;

    /// Human-readable service name.
    fn name(&self) -> &str;
}
