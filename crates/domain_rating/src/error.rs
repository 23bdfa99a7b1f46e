//! Rating domain errors
//!
//! Every error crosses the public boundary as a value; nothing in this
//! domain panics or retries. Messages name the precondition that failed so
//! the orchestrating caller can surface them verbatim.

use core_kernel::identifiers::UnknownTierKind;
use thiserror::Error;

/// Errors that can occur while rating a risk
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// Driver is below the minimum insurable age
    #[error("Driver must be at least 18 years old")]
    IneligibleDriver { age: u32 },

    /// Input fails a basic precondition (non-positive value, negative years)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insurer id does not exist in the rate book
    #[error("Unknown insurer: {0}")]
    UnknownInsurer(String),

    /// Tier code is not one of liability/standard/premium (or "all" where
    /// a selector is accepted)
    #[error("Unknown tier: {0}")]
    UnknownTier(String),
}

impl RatingError {
    /// Creates an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        RatingError::InvalidInput(message.into())
    }

    /// Creates an unknown-insurer error
    pub fn unknown_insurer(id: impl std::fmt::Display) -> Self {
        RatingError::UnknownInsurer(id.to_string())
    }
}

impl From<UnknownTierKind> for RatingError {
    fn from(err: UnknownTierKind) -> Self {
        RatingError::UnknownTier(err.0)
    }
}
