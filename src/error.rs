//! Error types for standard-value selection.
//!
//! This module provides a unified error type [`PassiveError`] that covers
//! every failure a table, combination, search or tolerance call can report.

use thiserror::Error;

/// Result type alias using [`PassiveError`].
pub type Result<T> = std::result::Result<T, PassiveError>;

/// Unified error type for all selection operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PassiveError {
    // ============ Table Errors ============
    /// Density is not one of the EIA series (3, 6, 12, 24, 48, 96)
    #[error("Unsupported EIA density {density} (expected 3, 6, 12, 24, 48 or 96)")]
    InvalidStandard { density: u32 },

    // ============ Input Errors ============
    /// Non-positive magnitude, bad tolerance, bad bounds or unsupported arity
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Value text could not be parsed (e.g. "10k", "4.7u")
    #[error("Invalid value '{text}'")]
    InvalidValue { text: String },

    // ============ Search Outcomes ============
    /// The bounds exclude every candidate tuple
    #[error("No combination of {positions} standard values satisfies the bounds")]
    NoFeasibleCombination { positions: usize },
}

impl PassiveError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(text: impl Into<String>) -> Self {
        Self::InvalidValue { text: text.into() }
    }

    /// Whether the caller can recover by widening bounds or changing the target.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoFeasibleCombination { .. })
    }
}
