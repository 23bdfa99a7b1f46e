//! Quote aggregation
//!
//! Runs the premium calculator across every registered insurer for one or
//! all tiers and ranks the offers. Aggregation is best-effort: a single
//! insurer's calculation error never fails the request. The insurer is
//! dropped from the ranked list and recorded on a secondary `skipped` list
//! for observability.

use core_kernel::{InsurerId, Money, TierKind};
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::addons::AddOnResolver;
use crate::calculator::{PremiumCalculator, QuoteRequest};
use crate::error::RatingError;
use crate::tables::RateBook;

/// Which tiers a quoting request covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierSelector {
    /// All three tiers
    All,
    /// A single tier
    Tier(TierKind),
}

impl TierSelector {
    /// Tiers to price, in ascending coverage order
    pub fn tiers(&self) -> Vec<TierKind> {
        match self {
            TierSelector::All => TierKind::ALL.to_vec(),
            TierSelector::Tier(kind) => vec![*kind],
        }
    }
}

impl FromStr for TierSelector {
    type Err = RatingError;

    /// Parses a tier code or the case-insensitive sentinel "all"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(TierSelector::All);
        }
        Ok(TierSelector::Tier(TierKind::from_str(s)?))
    }
}

/// One ranked offer within a tier
#[derive(Debug, Clone, Serialize)]
pub struct RankedQuote {
    pub insurer: InsurerId,
    pub insurer_name: String,
    pub reputation: String,
    pub annual_premium: Money,
    pub monthly_premium: Money,
    /// Human-readable add-on names; populated for the premium tier only
    pub add_ons: Vec<String>,
}

/// An insurer omitted from a tier's results, with the reason
#[derive(Debug, Clone, Serialize)]
pub struct SkippedQuote {
    pub tier: TierKind,
    pub insurer: InsurerId,
    pub reason: String,
}

/// Ranked quotes per tier, plus the skipped-insurer diagnostics
#[derive(Debug, Clone, Serialize)]
pub struct QuoteSet {
    /// Ascending by annual premium within each tier; ties keep insurer
    /// registration order
    pub by_tier: BTreeMap<TierKind, Vec<RankedQuote>>,
    pub skipped: Vec<SkippedQuote>,
}

/// Batches calculator runs across all insurers and ranks the results
#[derive(Debug, Clone, Copy)]
pub struct QuoteAggregator<'a> {
    rate_book: &'a RateBook,
}

impl<'a> QuoteAggregator<'a> {
    pub fn new(rate_book: &'a RateBook) -> Self {
        Self { rate_book }
    }

    /// Prices every insurer for the selected tiers
    ///
    /// Driver age and vehicle value are validated up front; a violation is
    /// a single top-level error with no insurer attempted. Per-insurer
    /// failures after that are swallowed into `skipped`.
    pub fn quotes(
        &self,
        request: &QuoteRequest,
        selector: TierSelector,
    ) -> Result<QuoteSet, RatingError> {
        request.validate()?;

        let calculator = PremiumCalculator::new(self.rate_book);
        let resolver = AddOnResolver::new(self.rate_book);
        let mut by_tier = BTreeMap::new();
        let mut skipped = Vec::new();

        for tier in selector.tiers() {
            let mut ranked: Vec<RankedQuote> = Vec::with_capacity(self.rate_book.insurers().len());

            for profile in self.rate_book.insurers() {
                match calculator.calculate(request, &profile.id, tier) {
                    Ok(quote) => ranked.push(RankedQuote {
                        insurer: quote.insurer,
                        insurer_name: quote.insurer_name,
                        reputation: quote.reputation,
                        annual_premium: quote.annual_premium,
                        monthly_premium: quote.monthly_premium,
                        add_ons: if tier == TierKind::Premium {
                            resolver.display_names(&profile.id)
                        } else {
                            Vec::new()
                        },
                    }),
                    Err(reason) => {
                        tracing::warn!(
                            insurer = %profile.id,
                            tier = %tier,
                            error = %reason,
                            "insurer skipped during aggregation"
                        );
                        skipped.push(SkippedQuote {
                            tier,
                            insurer: profile.id.clone(),
                            reason: reason.to_string(),
                        });
                    }
                }
            }

            // Stable sort keeps registration order on equal premiums
            ranked.sort_by(|a, b| a.annual_premium.cmp(&b.annual_premium));
            by_tier.insert(tier, ranked);
        }

        tracing::debug!(
            tiers = by_tier.len(),
            skipped = skipped.len(),
            "aggregation complete"
        );

        Ok(QuoteSet { by_tier, skipped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn toyota_request() -> QuoteRequest {
        QuoteRequest {
            car_brand: "Toyota".to_string(),
            car_value: Money::new(dec!(20000)),
            driver_age: 30,
            license_years: 10,
        }
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!("ALL".parse::<TierSelector>(), Ok(TierSelector::All));
        assert_eq!(
            "standard".parse::<TierSelector>(),
            Ok(TierSelector::Tier(TierKind::Standard))
        );
        assert_eq!(
            "gold".parse::<TierSelector>(),
            Err(RatingError::UnknownTier("gold".to_string()))
        );
    }

    #[test]
    fn test_underage_driver_is_top_level_error() {
        let book = RateBook::standard();
        let aggregator = QuoteAggregator::new(&book);
        let mut request = toyota_request();
        request.driver_age = 17;

        let result = aggregator.quotes(&request, TierSelector::All);
        assert_eq!(result.unwrap_err(), RatingError::IneligibleDriver { age: 17 });
    }

    #[test]
    fn test_non_positive_car_value_is_top_level_error() {
        let book = RateBook::standard();
        let aggregator = QuoteAggregator::new(&book);
        let mut request = toyota_request();
        request.car_value = Money::zero();

        let result = aggregator.quotes(&request, TierSelector::All);
        assert!(matches!(result, Err(RatingError::InvalidInput(_))));
    }

    #[test]
    fn test_per_insurer_failures_fill_skipped_list() {
        let book = RateBook::standard();
        let aggregator = QuoteAggregator::new(&book);
        let mut request = toyota_request();
        // Passes the aggregator's pre-validation but fails in the
        // calculator for every insurer
        request.license_years = -3;

        let set = aggregator
            .quotes(&request, TierSelector::Tier(TierKind::Standard))
            .unwrap();
        assert!(set.by_tier[&TierKind::Standard].is_empty());
        assert_eq!(set.skipped.len(), book.insurers().len());
    }
}
