//! CLI error types

use thiserror::Error;
use visibility_engine::VisibilityError;

/// CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] VisibilityError),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
