//! Strongly-typed identifiers for reference-data entities
//!
//! The quoting engine's reference data is keyed by short symbolic codes
//! ("geico", "roadside_assistance") rather than surrogate UUIDs, so the
//! identifier newtypes wrap strings. The wrappers prevent accidental mixing
//! of insurer and add-on codes, and normalize case so lookups are
//! insensitive to how the caller spells the code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

macro_rules! define_symbol_id {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier, normalizing to lowercase
            pub fn new(code: impl AsRef<str>) -> Self {
                Self(code.as_ref().trim().to_ascii_lowercase())
            }

            /// Returns the normalized code
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self::new(code)
            }
        }
    };
}

define_symbol_id!(InsurerId, "Identifier for an insurer profile");
define_symbol_id!(AddOnId, "Identifier for a catalog add-on");

/// Error returned when a tier code is not recognized
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown coverage tier: {0}")]
pub struct UnknownTierKind(pub String);

/// The three coverage tiers, in ascending coverage order
///
/// The ordering (liability < standard < premium) is relied on for stable,
/// deterministic iteration when quoting all tiers at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierKind {
    Liability,
    Standard,
    Premium,
}

impl TierKind {
    /// All tiers in ascending coverage order
    pub const ALL: [TierKind; 3] = [TierKind::Liability, TierKind::Standard, TierKind::Premium];

    /// Returns the tier code used in requests and payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            TierKind::Liability => "liability",
            TierKind::Standard => "standard",
            TierKind::Premium => "premium",
        }
    }
}

impl fmt::Display for TierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TierKind {
    type Err = UnknownTierKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "liability" => Ok(TierKind::Liability),
            "standard" => Ok(TierKind::Standard),
            "premium" => Ok(TierKind::Premium),
            other => Err(UnknownTierKind(other.to_string())),
        }
    }
}
