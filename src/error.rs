use std::path::PathBuf;

use thiserror::Error;

/// A color name outside the swatch palette
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown brush color: {0:?}")]
pub struct ParseColorError(pub String);

/// Errors that can occur while loading the chalkboard configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
