//! Tool-boundary error handling
//!
//! Domain errors are wrapped transparently so the message the caller sees
//! is the domain's own ("Unknown insurer: lemonade"). At this boundary
//! every failure becomes an `{"error": ...}` payload value.

use domain_issuance::IssuanceError;
use domain_rating::RatingError;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Errors surfaced by the four tool operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error(transparent)]
    Rating(#[from] RatingError),

    #[error(transparent)]
    Issuance(#[from] IssuanceError),
}

impl ToolError {
    /// The error-value payload callers branch on
    pub fn payload(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}

/// Converts a typed tool result into the error-value payload contract
pub fn to_payload<T: Serialize>(result: Result<T, ToolError>) -> Value {
    match result {
        Ok(value) => serde_json::to_value(value)
            .unwrap_or_else(|err| json!({ "error": format!("Serialization failure: {err}") })),
        Err(err) => err.payload(),
    }
}
