//! Test Utilities Crate
//!
//! Shared test infrastructure for the quoting engine test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built reference scenarios and expected premiums
//! - `builders`: Builder patterns for test request construction

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
