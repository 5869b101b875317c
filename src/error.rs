//! Error types for the frequency opponent model

use crate::types::{IssueId, Value};
use thiserror::Error;

/// Main error type for model operations
#[derive(Error, Debug)]
pub enum ModelError {
    // Domain errors
    #[error("Domain has no issues")]
    EmptyDomain,

    #[error("Issue {issue} is listed more than once in the domain")]
    DuplicateIssue { issue: IssueId },

    // Bid errors
    #[error("Bid has no value for issue {issue}")]
    UnassignedValue { issue: IssueId },

    #[error("Bid references unknown issue {issue}")]
    UnknownIssue { issue: IssueId },

    #[error("Value '{value}' is not admissible for issue {issue}")]
    UnknownValue { issue: IssueId, value: Value },

    // Model lifecycle errors
    #[error("Model has not been initialized with a domain")]
    NotInitialized,

    #[error("No opponent bids observed yet")]
    NoObservations,

    #[error("Model lock poisoned")]
    LockPoisoned,

    // Session errors
    #[error("Invalid transcript: {0}")]
    InvalidTranscript(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfig(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ModelError::UnknownIssue { issue: IssueId(7) };
        assert_eq!(err.to_string(), "Bid references unknown issue 7");
    }

    #[test]
    fn test_unknown_value_message() {
        let err = ModelError::UnknownValue {
            issue: IssueId(1),
            value: Value::from("green"),
        };
        assert_eq!(
            err.to_string(),
            "Value 'green' is not admissible for issue 1"
        );
    }

    #[test]
    fn test_error_conversion() {
        fn json_error_function() -> Result<()> {
            let _: IssueId = serde_json::from_str("\"not a number\"")?;
            Ok(())
        }

        let result = json_error_function();
        assert!(matches!(result.unwrap_err(), ModelError::Json(_)));
    }
}
