//! Powbench Error System
//!
//! Error types for benchmark configuration and execution. Out-of-memory
//! during dataset allocation is deliberately not modelled here; it aborts
//! the process with the runtime default, as there is no meaningful recovery
//! for a closed-form batch computation.

use thiserror::Error;

/// Result type for all benchmark operations
pub type BenchResult<T> = Result<T, BenchError>;

/// Main error type for benchmark operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation errors
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Reason for validation failure
        reason: String,
    },
}

impl BenchError {
    /// Create configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create validation error
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BenchError::validation("value_range", "low must be below high");
        assert!(err.to_string().contains("value_range"));
        assert!(err.to_string().contains("low must be below high"));
    }

    #[test]
    fn test_configuration_error_display() {
        let err = BenchError::configuration("bad config");
        assert_eq!(err.to_string(), "Configuration error: bad config");
    }
}
