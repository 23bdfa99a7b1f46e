//! Risk classification
//!
//! Maps the raw quoting inputs to the discrete brackets the rate tables are
//! keyed by. All classifiers are pure functions: brand aliases are disjoint
//! across categories by construction, so match order never affects the
//! result, and the age/experience ranges are contiguous and non-overlapping.

use core_kernel::money::Rate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum insurable driver age; younger drivers are ineligible rather
/// than bracketed
pub const MINIMUM_DRIVER_AGE: u32 = 18;

/// Pricing category of a vehicle brand
///
/// The base rate expresses the annual premium as a fraction of the vehicle
/// value. Brands not in any alias list fall into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandCategory {
    American,
    Japanese,
    German,
    Other,
}

impl BrandCategory {
    const AMERICAN_ALIASES: &'static [&'static str] = &[
        "Ford", "Chevrolet", "Chevy", "Dodge", "GMC", "Jeep", "Cadillac", "Lincoln", "Buick",
        "Chrysler", "Ram",
    ];

    const JAPANESE_ALIASES: &'static [&'static str] = &[
        "Toyota", "Honda", "Nissan", "Mazda", "Subaru", "Lexus", "Acura", "Infiniti", "Mitsubishi",
    ];

    const GERMAN_ALIASES: &'static [&'static str] = &[
        "BMW", "Mercedes", "Mercedes-Benz", "Audi", "Volkswagen", "VW", "Porsche", "Mini",
    ];

    /// Classifies a brand name: whitespace-trimmed, case-insensitive exact
    /// match against each category's alias list, defaulting to `Other`
    pub fn classify(name: &str) -> Self {
        let name = name.trim();
        for category in [Self::American, Self::Japanese, Self::German] {
            if category
                .aliases()
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
            {
                return category;
            }
        }
        Self::Other
    }

    /// Returns the brand aliases mapped into this category
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::American => Self::AMERICAN_ALIASES,
            Self::Japanese => Self::JAPANESE_ALIASES,
            Self::German => Self::GERMAN_ALIASES,
            Self::Other => &[],
        }
    }

    /// Base rate as a fraction of vehicle value
    pub fn base_rate(&self) -> Rate {
        match self {
            Self::American => Rate::new(dec!(0.05)),
            Self::Japanese => Rate::new(dec!(0.055)),
            Self::German => Rate::new(dec!(0.06)),
            Self::Other => Rate::new(dec!(0.065)),
        }
    }

    /// Returns the category code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::American => "american",
            Self::Japanese => "japanese",
            Self::German => "german",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for BrandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Age-based risk bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBracket {
    /// 18-25 inclusive, +15%
    Young,
    /// 26-60 inclusive, standard rate
    Standard,
    /// Over 60, -10%
    Senior,
}

impl AgeBracket {
    /// Classifies a driver age; `None` below the minimum insurable age
    pub fn classify(age: u32) -> Option<Self> {
        match age {
            0..=17 => None,
            18..=25 => Some(Self::Young),
            26..=60 => Some(Self::Standard),
            _ => Some(Self::Senior),
        }
    }

    /// Risk multiplier for this bracket
    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::Young => dec!(1.15),
            Self::Standard => dec!(1.0),
            Self::Senior => dec!(0.90),
        }
    }

    /// Human-readable age range
    pub fn label(&self) -> &'static str {
        match self {
            Self::Young => "18-25",
            Self::Standard => "26-60",
            Self::Senior => "60+",
        }
    }
}

/// License-experience risk bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceBracket {
    /// 0-2 years, +20%
    Novice,
    /// 3-5 years, +10%
    Intermediate,
    /// Over 5 years, standard rate
    Experienced,
}

impl ExperienceBracket {
    /// Classifies license years; `None` for negative input
    pub fn classify(years: i32) -> Option<Self> {
        match years {
            i32::MIN..=-1 => None,
            0..=2 => Some(Self::Novice),
            3..=5 => Some(Self::Intermediate),
            _ => Some(Self::Experienced),
        }
    }

    /// Risk multiplier for this bracket
    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::Novice => dec!(1.20),
            Self::Intermediate => dec!(1.10),
            Self::Experienced => dec!(1.0),
        }
    }
}
