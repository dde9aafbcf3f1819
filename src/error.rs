//! Unified error types for cloud-db-advisor.
//!
//! Every error in this module is raised before any score is produced: the
//! engine either builds from valid inputs or does not build at all.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for advisor operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AdvisorError {
    /// Priority weights cannot be normalized
    #[error("Invalid priority weights (cost={cost}, carbon={carbon}, security={security}): {reason}")]
    InvalidWeight {
        cost: f64,
        carbon: f64,
        security: f64,
        reason: String,
    },

    /// Workload volumes must be strictly positive
    #[error("Invalid workload: {field} must be a positive number, got {value}")]
    InvalidWorkload { field: &'static str, value: f64 },

    /// Identifier outside the closed set of architecture options
    #[error("Unknown architecture '{0}' (expected one of: rds_multi_az, dynamodb, aurora_serverless)")]
    UnknownArchitecture(String),

    /// Reference tables failed load-time validation
    #[error("Reference data is inconsistent: {0}")]
    ReferenceData(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl AdvisorError {
    /// Create a weight error for the given raw triple
    pub fn invalid_weight(cost: f64, carbon: f64, security: f64, reason: impl Into<String>) -> Self {
        Self::InvalidWeight {
            cost,
            carbon,
            security,
            reason: reason.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        Self::Io {
            message: source.to_string(),
            path: Some(path),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the error comes from caller-supplied evaluation inputs.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidWeight { .. } | Self::InvalidWorkload { .. })
    }
}
