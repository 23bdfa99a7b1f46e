//! Rate tables
//!
//! Immutable reference data for the quoting engine: insurer profiles,
//! coverage tiers, and the add-on catalog. A [`RateBook`] is built once at
//! startup through a validating constructor and injected into the
//! calculator, aggregator, resolver, and issuer; it is never mutated, so
//! concurrent calls need no coordination.

use core_kernel::{AddOnId, InsurerId, Money, TierKind};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Errors raised by rate-book construction
///
/// These signal data-integrity bugs in the reference data, not runtime
/// conditions; a valid rate book can never produce them after startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Duplicate insurer: {0}")]
    DuplicateInsurer(InsurerId),

    #[error("Insurer {insurer} has non-positive multiplier {multiplier}")]
    NonPositiveMultiplier {
        insurer: InsurerId,
        multiplier: Decimal,
    },

    #[error("Insurer {insurer} references unknown add-on: {add_on}")]
    UnknownAddOn { insurer: InsurerId, add_on: AddOnId },

    #[error("Insurer {insurer} references unknown special feature: {feature}")]
    UnknownFeature { insurer: InsurerId, feature: String },

    #[error("Add-on {0} has a negative annual cost")]
    NegativeAddOnCost(AddOnId),

    #[error("Tier {0} defined more than once")]
    DuplicateTier(TierKind),

    #[error("Tier {0} is missing")]
    MissingTier(TierKind),

    #[error("Tier {0} has a non-positive price multiplier")]
    NonPositiveTierMultiplier(TierKind),

    #[error("Tier {0} has a negative minimum annual premium")]
    NegativeTierMinimum(TierKind),
}

/// An optional coverage rider with a fixed annual cost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOn {
    pub id: AddOnId,
    pub name: String,
    pub annual_cost: Money,
}

/// A feature an insurer bundles at no charge (e.g., concierge claims)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialFeature {
    pub id: String,
    pub name: String,
}

/// An insurer's pricing profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsurerProfile {
    pub id: InsurerId,
    pub name: String,
    /// Rate multiplier against the tier-floored premium; baseline 1.0
    pub multiplier: Decimal,
    pub reputation: String,
    /// Catalog add-ons this insurer offers, in presentation order
    pub add_ons: Vec<AddOnId>,
    /// Ids of free special features, resolved against the feature table
    pub special_features: Vec<String>,
}

/// A coverage tier's pricing terms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierDefinition {
    pub kind: TierKind,
    pub name: String,
    pub price_multiplier: Decimal,
    /// Floor applied to the adjusted premium before the insurer multiplier
    pub minimum_annual: Money,
    pub includes: Vec<String>,
}

/// The complete, validated reference data set
///
/// Insurers keep their registration order; quote ranking uses it as the
/// deterministic tie-breaker.
#[derive(Debug, Clone)]
pub struct RateBook {
    insurers: Vec<InsurerProfile>,
    insurer_index: HashMap<InsurerId, usize>,
    tiers: BTreeMap<TierKind, TierDefinition>,
    add_ons: Vec<AddOn>,
    special_features: Vec<SpecialFeature>,
}

impl RateBook {
    /// Builds a rate book, validating every cross-reference and invariant
    pub fn new(
        insurers: Vec<InsurerProfile>,
        tiers: Vec<TierDefinition>,
        add_ons: Vec<AddOn>,
        special_features: Vec<SpecialFeature>,
    ) -> Result<Self, TableError> {
        for add_on in &add_ons {
            if add_on.annual_cost < Money::zero() {
                return Err(TableError::NegativeAddOnCost(add_on.id.clone()));
            }
        }

        let mut tier_map = BTreeMap::new();
        for tier in tiers {
            if tier.price_multiplier <= dec!(0) {
                return Err(TableError::NonPositiveTierMultiplier(tier.kind));
            }
            if tier.minimum_annual < Money::zero() {
                return Err(TableError::NegativeTierMinimum(tier.kind));
            }
            if tier_map.contains_key(&tier.kind) {
                return Err(TableError::DuplicateTier(tier.kind));
            }
            tier_map.insert(tier.kind, tier);
        }
        for kind in TierKind::ALL {
            if !tier_map.contains_key(&kind) {
                return Err(TableError::MissingTier(kind));
            }
        }

        let mut insurer_index = HashMap::with_capacity(insurers.len());
        for (position, insurer) in insurers.iter().enumerate() {
            if insurer.multiplier <= dec!(0) {
                return Err(TableError::NonPositiveMultiplier {
                    insurer: insurer.id.clone(),
                    multiplier: insurer.multiplier,
                });
            }
            for add_on in &insurer.add_ons {
                if !add_ons.iter().any(|a| &a.id == add_on) {
                    return Err(TableError::UnknownAddOn {
                        insurer: insurer.id.clone(),
                        add_on: add_on.clone(),
                    });
                }
            }
            for feature in &insurer.special_features {
                if !special_features.iter().any(|f| &f.id == feature) {
                    return Err(TableError::UnknownFeature {
                        insurer: insurer.id.clone(),
                        feature: feature.clone(),
                    });
                }
            }
            if insurer_index
                .insert(insurer.id.clone(), position)
                .is_some()
            {
                return Err(TableError::DuplicateInsurer(insurer.id.clone()));
            }
        }

        Ok(Self {
            insurers,
            insurer_index,
            tiers: tier_map,
            add_ons,
            special_features,
        })
    }

    /// Insurers in registration order
    pub fn insurers(&self) -> &[InsurerProfile] {
        &self.insurers
    }

    /// Looks up an insurer by id
    pub fn insurer(&self, id: &InsurerId) -> Option<&InsurerProfile> {
        self.insurer_index.get(id).map(|&i| &self.insurers[i])
    }

    /// Looks up an insurer by id or display name, case-insensitively
    pub fn find_insurer(&self, name: &str) -> Option<&InsurerProfile> {
        let id = InsurerId::new(name);
        self.insurer(&id).or_else(|| {
            self.insurers
                .iter()
                .find(|i| i.name.eq_ignore_ascii_case(name.trim()))
        })
    }

    /// Returns the definition for a tier
    pub fn tier(&self, kind: TierKind) -> &TierDefinition {
        self.tiers
            .get(&kind)
            .expect("all tier kinds are validated present at construction")
    }

    /// The full add-on catalog, in catalog order
    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    /// Looks up a catalog add-on
    pub fn add_on(&self, id: &AddOnId) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| &a.id == id)
    }

    /// Looks up a special feature
    pub fn special_feature(&self, id: &str) -> Option<&SpecialFeature> {
        self.special_features.iter().find(|f| f.id == id)
    }

    /// The standard US auto rate book: five insurers, three tiers, six
    /// add-ons
    pub fn standard() -> Self {
        let add_ons = vec![
            add_on("roadside_assistance", "Roadside Assistance", 50),
            add_on("rental_car", "Rental Car Coverage", 75),
            add_on("gap_insurance", "Gap Insurance", 100),
            add_on("accident_forgiveness", "Accident Forgiveness", 150),
            add_on("oem_parts_guarantee", "OEM Parts Guarantee", 75),
        ];

        let special_features = vec![SpecialFeature {
            id: "concierge_claims_service".to_string(),
            name: "Concierge Claims Service".to_string(),
        }];

        let insurers = vec![
            insurer(
                "geico",
                "GEICO",
                dec!(0.95),
                "Budget-friendly, fast quotes",
                &["roadside_assistance", "rental_car"],
                &[],
            ),
            insurer(
                "progressive",
                "Progressive",
                dec!(0.98),
                "Innovative, name-your-price",
                &["roadside_assistance", "rental_car", "accident_forgiveness"],
                &[],
            ),
            insurer(
                "statefarm",
                "StateFarm",
                dec!(1.0),
                "Like a good neighbor, reliable",
                &[
                    "roadside_assistance",
                    "rental_car",
                    "gap_insurance",
                    "accident_forgiveness",
                ],
                &[],
            ),
            insurer(
                "allstate",
                "Allstate",
                dec!(1.05),
                "You're in good hands",
                &["roadside_assistance", "gap_insurance", "accident_forgiveness"],
                &[],
            ),
            insurer(
                "travelers",
                "Travelers",
                dec!(1.08),
                "Premium service, established since 1853",
                &[
                    "roadside_assistance",
                    "rental_car",
                    "gap_insurance",
                    "accident_forgiveness",
                    "oem_parts_guarantee",
                ],
                &["concierge_claims_service"],
            ),
        ];

        let tiers = vec![
            TierDefinition {
                kind: TierKind::Liability,
                name: "Liability Only".to_string(),
                price_multiplier: dec!(0.30),
                minimum_annual: Money::new(dec!(700.00)),
                includes: vec![
                    "Bodily Injury Liability".to_string(),
                    "Property Damage Liability".to_string(),
                ],
            },
            TierDefinition {
                kind: TierKind::Standard,
                name: "Standard Coverage".to_string(),
                price_multiplier: dec!(1.0),
                minimum_annual: Money::new(dec!(2000.00)),
                includes: vec![
                    "Bodily Injury Liability".to_string(),
                    "Property Damage Liability".to_string(),
                    "Collision Coverage".to_string(),
                    "Comprehensive Coverage".to_string(),
                    "Uninsured Motorist".to_string(),
                ],
            },
            TierDefinition {
                kind: TierKind::Premium,
                name: "Premium Coverage".to_string(),
                price_multiplier: dec!(1.0),
                minimum_annual: Money::new(dec!(2500.00)),
                includes: vec![
                    "Everything in Standard".to_string(),
                    "Plus all insurer add-ons".to_string(),
                ],
            },
        ];

        Self::new(insurers, tiers, add_ons, special_features)
            .expect("standard rate book satisfies its own invariants")
    }
}

fn add_on(id: &str, name: &str, annual_cost: i64) -> AddOn {
    AddOn {
        id: AddOnId::new(id),
        name: name.to_string(),
        annual_cost: Money::from_cents(annual_cost * 100),
    }
}

fn insurer(
    id: &str,
    name: &str,
    multiplier: Decimal,
    reputation: &str,
    add_ons: &[&str],
    special_features: &[&str],
) -> InsurerProfile {
    InsurerProfile {
        id: InsurerId::new(id),
        name: name.to_string(),
        multiplier,
        reputation: reputation.to_string(),
        add_ons: add_ons.iter().map(AddOnId::new).collect(),
        special_features: special_features.iter().map(|f| f.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rate_book_is_valid() {
        let book = RateBook::standard();
        assert_eq!(book.insurers().len(), 5);
        assert_eq!(book.add_ons().len(), 5);
        assert_eq!(book.tier(TierKind::Standard).minimum_annual, Money::new(dec!(2000)));
    }

    #[test]
    fn test_find_insurer_matches_id_and_name() {
        let book = RateBook::standard();
        assert!(book.find_insurer("GEICO").is_some());
        assert!(book.find_insurer("geico").is_some());
        assert!(book.find_insurer(" StateFarm ").is_some());
        assert!(book.find_insurer("Lemonade").is_none());
    }

    #[test]
    fn test_insurers_keep_registration_order() {
        let book = RateBook::standard();
        let ids: Vec<&str> = book.insurers().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["geico", "progressive", "statefarm", "allstate", "travelers"]
        );
    }

    #[test]
    fn test_rejects_non_positive_multiplier() {
        let mut insurers = RateBook::standard().insurers().to_vec();
        insurers[0].multiplier = dec!(0);
        let result = RateBook::new(
            insurers,
            standard_tiers(),
            RateBook::standard().add_ons().to_vec(),
            vec![],
        );
        assert!(matches!(
            result,
            Err(TableError::NonPositiveMultiplier { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_add_on_reference() {
        let insurers = vec![insurer(
            "acme",
            "Acme Mutual",
            dec!(1.0),
            "Untested",
            &["teleporter_cover"],
            &[],
        )];
        let result = RateBook::new(insurers, standard_tiers(), vec![], vec![]);
        assert!(matches!(result, Err(TableError::UnknownAddOn { .. })));
    }

    #[test]
    fn test_rejects_missing_tier() {
        let mut tiers = standard_tiers();
        tiers.pop();
        let result = RateBook::new(vec![], tiers, vec![], vec![]);
        assert_eq!(result.unwrap_err(), TableError::MissingTier(TierKind::Premium));
    }

    #[test]
    fn test_rejects_unknown_special_feature() {
        let insurers = vec![insurer(
            "acme",
            "Acme Mutual",
            dec!(1.0),
            "Untested",
            &[],
            &["free_lunch"],
        )];
        let result = RateBook::new(insurers, standard_tiers(), vec![], vec![]);
        assert!(matches!(result, Err(TableError::UnknownFeature { .. })));
    }

    fn standard_tiers() -> Vec<TierDefinition> {
        TierKind::ALL
            .iter()
            .map(|&kind| RateBook::standard().tier(kind).clone())
            .collect()
    }
}
