//! Pre-built test data for common scenarios
//!
//! Centralizes the worked examples the suite asserts against so every
//! test references the same driver profiles and expected premiums.

use core_kernel::Money;
use domain_rating::QuoteRequest;
use rust_decimal_macros::dec;

/// Quote request fixtures covering the rating boundaries
pub struct RequestFixtures;

impl RequestFixtures {
    /// A 30-year-old with 10 years of experience driving a $20,000 Toyota.
    /// Every multiplier in this profile is 1.0, so premiums reduce to the
    /// tier math alone.
    pub fn neutral_driver() -> QuoteRequest {
        QuoteRequest {
            car_brand: "Toyota".to_string(),
            car_value: Money::new(dec!(20000)),
            driver_age: 30,
            license_years: 10,
        }
    }

    /// A 19-year-old with 1 year of experience driving a $60,000 BMW.
    /// Triggers the young-driver and novice surcharges on a German rate.
    pub fn young_novice() -> QuoteRequest {
        QuoteRequest {
            car_brand: "BMW".to_string(),
            car_value: Money::new(dec!(60000)),
            driver_age: 19,
            license_years: 1,
        }
    }

    /// A 65-year-old with 40 years of experience driving a $15,000 Ford.
    /// Exercises the senior discount.
    pub fn senior_veteran() -> QuoteRequest {
        QuoteRequest {
            car_brand: "Ford".to_string(),
            car_value: Money::new(dec!(15000)),
            driver_age: 65,
            license_years: 40,
        }
    }
}

/// Expected premiums for the fixture scenarios, to the cent
pub struct PremiumFixtures;

impl PremiumFixtures {
    /// StateFarm standard tier for [`RequestFixtures::neutral_driver`]:
    /// 20000 x 0.055 = 1100, floored to the $2000 tier minimum.
    pub fn neutral_statefarm_standard_annual() -> Money {
        Money::new(dec!(2000.00))
    }

    /// Monthly share of the neutral StateFarm quote (2000 / 12, rounded
    /// independently of the annual figure).
    pub fn neutral_statefarm_standard_monthly() -> Money {
        Money::new(dec!(166.67))
    }

    /// GEICO premium tier for the neutral driver: floored to 2500, then
    /// 2500 x 0.95 = 2375, plus the full $125 add-on bundle.
    pub fn neutral_geico_premium_annual() -> Money {
        Money::new(dec!(2500.00))
    }

    /// Travelers premium tier for the neutral driver: 2500 x 1.08 = 2700
    /// plus $450 of add-ons (concierge claims is free).
    pub fn neutral_travelers_premium_annual() -> Money {
        Money::new(dec!(3150.00))
    }

    /// StateFarm standard tier for the young novice:
    /// 60000 x 0.06 x 1.15 x 1.20 = 4968.
    pub fn young_novice_statefarm_standard_annual() -> Money {
        Money::new(dec!(4968.00))
    }
}

/// Customer and vehicle detail fixtures for issuance tests
pub struct IssuanceFixtures;

impl IssuanceFixtures {
    pub fn full_name() -> &'static str {
        "Jordan Reyes"
    }

    pub fn email() -> &'static str {
        "jordan.reyes@example.com"
    }

    pub fn date_of_birth() -> &'static str {
        "1996-04-12"
    }

    pub fn policy_start_date() -> &'static str {
        "2026-09-01"
    }
}
