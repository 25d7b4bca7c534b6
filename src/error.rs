use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the application config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
