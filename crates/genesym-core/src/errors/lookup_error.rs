/// Nomenclature lookup errors. Propagated as-is; the resolver never retries.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("lookup service unavailable: {reason}")]
    ServiceUnavailable { reason: String },

    #[error("malformed lookup response: {reason}")]
    MalformedResponse { reason: String },
}
