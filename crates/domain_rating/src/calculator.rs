//! Premium calculation
//!
//! Prices one insurer/tier pair for a given vehicle and driver. The factor
//! composition follows a fixed order; in particular the tier minimum is
//! applied BEFORE the insurer multiplier, so a discounting insurer still
//! quotes relative to the tier's floor rather than undercutting it.

use core_kernel::{InsurerId, Money, TierKind};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::addons::{AddOnLine, AddOnResolver};
use crate::classifier::{AgeBracket, BrandCategory, ExperienceBracket, MINIMUM_DRIVER_AGE};
use crate::error::RatingError;
use crate::tables::RateBook;

/// The vehicle and driver facts a quote is priced from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub car_brand: String,
    pub car_value: Money,
    pub driver_age: u32,
    pub license_years: i32,
}

impl QuoteRequest {
    /// Checks the driver and vehicle preconditions shared by every quote
    /// path. Eligibility is checked ahead of everything else, so an
    /// ineligible driver is reported before any other problem with the
    /// request.
    pub fn validate(&self) -> Result<(), RatingError> {
        if self.driver_age < MINIMUM_DRIVER_AGE {
            return Err(RatingError::IneligibleDriver {
                age: self.driver_age,
            });
        }
        if !self.car_value.is_positive() {
            return Err(RatingError::invalid_input("Car value must be positive"));
        }
        Ok(())
    }
}

/// A priced offer for one insurer/tier pair
///
/// Ephemeral value object: created per calculation call, never stored.
/// Annual and monthly premiums are rounded to cents independently; twelve
/// monthly payments may differ from the annual by a few cents, which is
/// tolerated rather than reconciled.
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub insurer: InsurerId,
    pub insurer_name: String,
    pub reputation: String,
    pub tier: TierKind,
    pub tier_name: String,
    pub brand_category: BrandCategory,
    pub annual_premium: Money,
    pub monthly_premium: Money,
    /// Bundled add-ons; empty below the premium tier
    pub add_ons: Vec<AddOnLine>,
    pub coverage_includes: Vec<String>,
}

/// Prices a single insurer/tier pair against the rate book
#[derive(Debug, Clone, Copy)]
pub struct PremiumCalculator<'a> {
    rate_book: &'a RateBook,
}

impl<'a> PremiumCalculator<'a> {
    pub fn new(rate_book: &'a RateBook) -> Self {
        Self { rate_book }
    }

    /// Calculates the premium for one insurer and tier
    ///
    /// Factor order: brand base rate on vehicle value, then age, experience
    /// and tier multipliers, then the tier minimum floor, then the insurer
    /// multiplier. On the premium tier every add-on the insurer offers is
    /// bundled and charged, and any free special feature is listed at zero
    /// cost.
    ///
    /// # Errors
    ///
    /// - [`RatingError::IneligibleDriver`] for drivers under 18, checked
    ///   before any table lookup
    /// - [`RatingError::InvalidInput`] for negative license years
    /// - [`RatingError::UnknownInsurer`] for an id not in the rate book
    pub fn calculate(
        &self,
        request: &QuoteRequest,
        insurer: &InsurerId,
        tier: TierKind,
    ) -> Result<Quote, RatingError> {
        let age_bracket = AgeBracket::classify(request.driver_age).ok_or(
            RatingError::IneligibleDriver {
                age: request.driver_age,
            },
        )?;
        let experience = ExperienceBracket::classify(request.license_years)
            .ok_or_else(|| RatingError::invalid_input("License years cannot be negative"))?;

        let profile = self
            .rate_book
            .insurer(insurer)
            .ok_or_else(|| RatingError::unknown_insurer(insurer))?;
        let tier_def = self.rate_book.tier(tier);

        let category = BrandCategory::classify(&request.car_brand);
        let base = category.base_rate().apply(request.car_value);
        let adjusted = base
            .multiply(age_bracket.multiplier())
            .multiply(experience.multiplier())
            .multiply(tier_def.price_multiplier);

        // Floor first, then the insurer multiplier. Reversing this would
        // let a sub-1.0 multiplier push the quote below the tier minimum.
        let floored = adjusted.max(tier_def.minimum_annual);
        let mut premium = floored.multiply(profile.multiplier);

        let add_ons = if tier == TierKind::Premium {
            let resolver = AddOnResolver::new(self.rate_book);
            premium = premium + resolver.total(&profile.id);
            resolver.list(&profile.id)
        } else {
            Vec::new()
        };

        tracing::debug!(
            insurer = %profile.id,
            tier = %tier,
            category = %category,
            annual = %premium,
            "premium calculated"
        );

        Ok(Quote {
            insurer: profile.id.clone(),
            insurer_name: profile.name.clone(),
            reputation: profile.reputation.clone(),
            tier,
            tier_name: tier_def.name.clone(),
            brand_category: category,
            annual_premium: premium.round_to_cents(),
            monthly_premium: (premium / dec!(12)).round_to_cents(),
            add_ons,
            coverage_includes: tier_def.includes.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toyota_request() -> QuoteRequest {
        QuoteRequest {
            car_brand: "Toyota".to_string(),
            car_value: Money::new(dec!(20000)),
            driver_age: 30,
            license_years: 10,
        }
    }

    #[test]
    fn test_validate_reports_eligibility_before_car_value() {
        let mut request = toyota_request();
        request.driver_age = 17;
        request.car_value = Money::zero();

        assert_eq!(
            request.validate().unwrap_err(),
            RatingError::IneligibleDriver { age: 17 }
        );
    }

    #[test]
    fn test_underage_driver_rejected_before_lookup() {
        let book = RateBook::standard();
        let calculator = PremiumCalculator::new(&book);
        let mut request = toyota_request();
        request.driver_age = 17;

        // Unknown insurer too, but the age check comes first
        let result = calculator.calculate(&request, &InsurerId::new("nope"), TierKind::Standard);
        assert_eq!(result.unwrap_err(), RatingError::IneligibleDriver { age: 17 });
    }

    #[test]
    fn test_negative_license_years_rejected() {
        let book = RateBook::standard();
        let calculator = PremiumCalculator::new(&book);
        let mut request = toyota_request();
        request.license_years = -1;

        let result = calculator.calculate(&request, &InsurerId::new("geico"), TierKind::Standard);
        assert!(matches!(result, Err(RatingError::InvalidInput(_))));
    }

    #[test]
    fn test_unknown_insurer_named_in_error() {
        let book = RateBook::standard();
        let calculator = PremiumCalculator::new(&book);

        let result =
            calculator.calculate(&toyota_request(), &InsurerId::new("lemonade"), TierKind::Standard);
        assert_eq!(
            result.unwrap_err(),
            RatingError::UnknownInsurer("lemonade".to_string())
        );
    }

    #[test]
    fn test_lower_tiers_carry_no_add_ons() {
        let book = RateBook::standard();
        let calculator = PremiumCalculator::new(&book);

        for tier in [TierKind::Liability, TierKind::Standard] {
            let quote = calculator
                .calculate(&toyota_request(), &InsurerId::new("travelers"), tier)
                .unwrap();
            assert!(quote.add_ons.is_empty(), "{tier} tier must not bundle add-ons");
        }
    }
}
