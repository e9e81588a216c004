//! Validation error types.
//!
//! The engine reports exactly two kinds of failure: address text that does
//! not match the family's incremental grammar, and a prefix length outside
//! the family's valid bound. Both are ordinary result values; neither is
//! fatal and neither leaves the calculator state partially updated.

use thiserror::Error;

/// Error returned by the validating engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Address text does not match the family's incremental grammar.
    #[error("{message}")]
    Format { message: String },

    /// Prefix length outside the valid bound for the current family.
    #[error("CIDR must be between 0 and {max}")]
    Range { max: u8 },
}

impl ValidationError {
    /// Build a [`ValidationError::Format`] from any message.
    pub fn format(message: impl Into<String>) -> Self {
        ValidationError::Format {
            message: message.into(),
        }
    }
}
