//! Error handling for genesym.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod genesym_error;
pub mod graph_error;
pub mod lookup_error;

pub use config_error::ConfigError;
pub use genesym_error::{GenesymError, GenesymResult};
pub use graph_error::GraphError;
pub use lookup_error::LookupError;
