//! Error types for the shopping-list crate.
//!
//! Validation is the only failure mode: aggregation and rendering are total
//! over validated input.

use thiserror::Error;

/// Errors raised while building cart lines from raw store values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShoppingListError {
    /// A raw value violates the cart line contract.
    #[error("invalid cart line {field}: {reason}")]
    InvalidInput {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the violation.
        reason: String,
    },
}

impl ShoppingListError {
    /// Build an [`ShoppingListError::InvalidInput`] for `field`.
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the field that failed validation.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidInput { field, .. } => field,
        }
    }
}
