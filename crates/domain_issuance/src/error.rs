//! Issuance domain errors

use thiserror::Error;

/// Errors that can occur while issuing a policy confirmation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IssuanceError {
    /// Insurer is not in the rate book
    #[error("Unknown insurer: {0}")]
    UnknownInsurer(String),

    /// A field failed to parse or violates a basic precondition
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl IssuanceError {
    /// Creates an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        IssuanceError::InvalidInput(message.into())
    }
}
