use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("home directory not available")]
    HomeDirectoryNotAvailable,

    #[error("invalid configuration file: {reason}")]
    InvalidFile { reason: String },

    #[error("configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("invalid provider: {0}")]
    InvalidProvider(String),
}
