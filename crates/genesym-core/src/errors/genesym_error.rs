use super::{ConfigError, GraphError, LookupError};

/// Top-level error. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum GenesymError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type GenesymResult<T> = Result<T, GenesymError>;
