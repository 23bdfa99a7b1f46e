//! Core Kernel - Foundational types for the auto-insurance quoting engine
//!
//! This crate provides the building blocks shared by the rating and issuance
//! domains:
//! - Money and rate types with precise decimal arithmetic
//! - Symbolic identifiers for reference-data entities

pub mod identifiers;
pub mod money;

pub use identifiers::{AddOnId, InsurerId, TierKind, UnknownTierKind};
pub use money::{Money, MoneyError, Rate};
