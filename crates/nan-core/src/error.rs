//! Error types for NaN-aware numeric operations
//!
//! Provides a unified error type for all nan-stats crates. Reductions over
//! numeric sequences never fail (degenerate input yields NaN), so errors are
//! reserved for contract violations such as searching an empty domain.

use thiserror::Error;

/// Core error type for NaN-aware operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operation that needs at least one element received none
    #[error("{operation}: collection must be non-empty")]
    EmptyInput { operation: &'static str },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    /// Create an error for a name that doesn't match any known variant
    pub fn unknown_variant(kind: &str, value: &str, expected: &[&str]) -> Self {
        Self::InvalidParameter(format!(
            "unknown {kind} '{value}', expected one of: {}",
            expected.join(", ")
        ))
    }
}
