//! Interface Tools
//!
//! The fixed function contract the quoting core exposes to its
//! orchestrating collaborator (a conversational agent or any other
//! caller). Exactly four operations are public:
//!
//! - [`InsuranceTools::get_insurance_quotes`]
//! - [`InsuranceTools::get_available_addons`]
//! - [`InsuranceTools::purchase_policy`]
//! - [`InsuranceTools::reference_catalog`]
//!
//! Each operation has a typed `Result` form and a `*_payload` form that
//! returns a `serde_json::Value` which is either the success payload or
//! `{"error": "<message>"}`. The public contract is error-value-based:
//! callers branch on the presence of the `error` key, and nothing crosses
//! this boundary as a panic.

pub mod dto;
pub mod error;
pub mod tools;

pub use error::{to_payload, ToolError};
pub use tools::InsuranceTools;
