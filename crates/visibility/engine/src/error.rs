//! Error types for engine configuration.
//!
//! Evaluation itself never fails; these only surface while building an
//! engine from configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Visibility engine errors
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum VisibilityError {
    /// Configuration parsed but violates an engine invariant
    #[error("Invalid visibility configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Configuration document could not be parsed
    #[error("Failed to parse visibility configuration: {reason}")]
    ConfigParse { reason: String },
}

impl From<serde_json::Error> for VisibilityError {
    fn from(err: serde_json::Error) -> Self {
        VisibilityError::ConfigParse {
            reason: err.to_string(),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, VisibilityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = VisibilityError::InvalidConfiguration {
            reason: "core must be visible".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid visibility configuration: core must be visible"
        );
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let err: VisibilityError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, VisibilityError::ConfigParse { .. }));
    }
}
