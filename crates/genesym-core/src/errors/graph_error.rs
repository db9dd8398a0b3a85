/// Resolution graph errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("symbol not found in resolution graph: {symbol}")]
    NodeNotFound { symbol: String },
}
