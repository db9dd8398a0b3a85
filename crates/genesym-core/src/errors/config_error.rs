/// Configuration errors. All of them are raised before any lookup call.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("manipulation `{name}` is not valid, choose from [{}]", .available.join(", "))]
    UnknownManipulation { name: String, available: Vec<String> },

    #[error("at least one manipulation must be selected")]
    EmptyManipulations,

    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}
