//! Add-on resolution
//!
//! Computes the add-ons an insurer offers and what they cost. Unknown
//! insurers resolve to an empty list rather than an error: callers at this
//! level treat the result as "no data" and apply their own policy.

use core_kernel::{InsurerId, Money};
use serde::{Deserialize, Serialize};

use crate::tables::RateBook;

/// One resolved add-on with its annual cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnLine {
    pub name: String,
    pub cost: Money,
    /// True for an insurer's free special feature, always listed last
    pub complimentary: bool,
}

/// Resolves per-insurer add-on eligibility against the rate book
#[derive(Debug, Clone, Copy)]
pub struct AddOnResolver<'a> {
    rate_book: &'a RateBook,
}

impl<'a> AddOnResolver<'a> {
    pub fn new(rate_book: &'a RateBook) -> Self {
        Self { rate_book }
    }

    /// Lists an insurer's add-ons in catalog order, with any free special
    /// feature appended last at zero cost
    pub fn list(&self, insurer: &InsurerId) -> Vec<AddOnLine> {
        let Some(profile) = self.rate_book.insurer(insurer) else {
            return Vec::new();
        };

        let mut lines: Vec<AddOnLine> = profile
            .add_ons
            .iter()
            .filter_map(|id| self.rate_book.add_on(id))
            .map(|add_on| AddOnLine {
                name: add_on.name.clone(),
                cost: add_on.annual_cost,
                complimentary: false,
            })
            .collect();

        for feature_id in &profile.special_features {
            if let Some(feature) = self.rate_book.special_feature(feature_id) {
                lines.push(AddOnLine {
                    name: feature.name.clone(),
                    cost: Money::zero(),
                    complimentary: true,
                });
            }
        }

        lines
    }

    /// Total annual cost of the insurer's catalog add-ons
    ///
    /// Free special features are excluded. Their cost is zero, so this is
    /// about intent rather than arithmetic.
    pub fn total(&self, insurer: &InsurerId) -> Money {
        self.list(insurer)
            .into_iter()
            .filter(|line| !line.complimentary)
            .map(|line| line.cost)
            .sum()
    }

    /// Human-readable add-on names for presentation, marking free features
    pub fn display_names(&self, insurer: &InsurerId) -> Vec<String> {
        self.list(insurer)
            .into_iter()
            .map(|line| {
                if line.complimentary {
                    format!("{} (free)", line.name)
                } else {
                    line.name
                }
            })
            .collect()
    }
}
