//! Test Data Builders
//!
//! Builder patterns for constructing tool requests with sensible
//! defaults. Tests specify only the fields under test and take defaults
//! for everything else.

use interface_tools::dto::{PurchaseRequest, QuotesRequest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::IssuanceFixtures;

/// Builder for quote tool requests
pub struct QuotesRequestBuilder {
    car_brand: String,
    car_value: Decimal,
    driver_age: u32,
    license_years: i32,
    coverage_tier: String,
}

impl Default for QuotesRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotesRequestBuilder {
    /// Creates a builder for the all-tiers neutral-driver request
    pub fn new() -> Self {
        Self {
            car_brand: "Toyota".to_string(),
            car_value: dec!(20000),
            driver_age: 30,
            license_years: 10,
            coverage_tier: "all".to_string(),
        }
    }

    /// Sets the car brand
    pub fn with_car_brand(mut self, brand: impl Into<String>) -> Self {
        self.car_brand = brand.into();
        self
    }

    /// Sets the car value
    pub fn with_car_value(mut self, value: Decimal) -> Self {
        self.car_value = value;
        self
    }

    /// Sets the driver age
    pub fn with_driver_age(mut self, age: u32) -> Self {
        self.driver_age = age;
        self
    }

    /// Sets the licensed years
    pub fn with_license_years(mut self, years: i32) -> Self {
        self.license_years = years;
        self
    }

    /// Sets the coverage tier selector string
    pub fn with_coverage_tier(mut self, tier: impl Into<String>) -> Self {
        self.coverage_tier = tier.into();
        self
    }

    /// Builds the request
    pub fn build(self) -> QuotesRequest {
        QuotesRequest {
            car_brand: self.car_brand,
            car_value: self.car_value,
            driver_age: self.driver_age,
            license_years: self.license_years,
            coverage_tier: self.coverage_tier,
        }
    }
}

/// Builder for purchase tool requests
pub struct PurchaseRequestBuilder {
    insurer_name: String,
    coverage_tier: String,
    annual_premium: Decimal,
    car_brand: String,
    car_model: String,
    car_year: u16,
    license_plate: String,
    full_name: String,
    date_of_birth: String,
    address: String,
    phone: String,
    email: String,
    driver_license_number: String,
    payment_method: String,
    policy_start_date: String,
}

impl Default for PurchaseRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PurchaseRequestBuilder {
    /// Creates a builder for a StateFarm standard-tier purchase
    pub fn new() -> Self {
        Self {
            insurer_name: "StateFarm".to_string(),
            coverage_tier: "standard".to_string(),
            annual_premium: dec!(2000),
            car_brand: "Toyota".to_string(),
            car_model: "Corolla".to_string(),
            car_year: 2022,
            license_plate: "8ABC123".to_string(),
            full_name: IssuanceFixtures::full_name().to_string(),
            date_of_birth: IssuanceFixtures::date_of_birth().to_string(),
            address: "482 Juniper Ave, Sacramento, CA".to_string(),
            phone: "+1-916-555-0147".to_string(),
            email: IssuanceFixtures::email().to_string(),
            driver_license_number: "D1234567".to_string(),
            payment_method: "credit_card".to_string(),
            policy_start_date: IssuanceFixtures::policy_start_date().to_string(),
        }
    }

    /// Sets the insurer name
    pub fn with_insurer(mut self, name: impl Into<String>) -> Self {
        self.insurer_name = name.into();
        self
    }

    /// Sets the coverage tier string
    pub fn with_coverage_tier(mut self, tier: impl Into<String>) -> Self {
        self.coverage_tier = tier.into();
        self
    }

    /// Sets the quoted annual premium
    pub fn with_annual_premium(mut self, premium: Decimal) -> Self {
        self.annual_premium = premium;
        self
    }

    /// Sets the payment method string
    pub fn with_payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = method.into();
        self
    }

    /// Sets the policy start date string
    pub fn with_policy_start_date(mut self, date: impl Into<String>) -> Self {
        self.policy_start_date = date.into();
        self
    }

    /// Sets the customer date of birth string
    pub fn with_date_of_birth(mut self, date: impl Into<String>) -> Self {
        self.date_of_birth = date.into();
        self
    }

    /// Builds the request
    pub fn build(self) -> PurchaseRequest {
        PurchaseRequest {
            insurer_name: self.insurer_name,
            coverage_tier: self.coverage_tier,
            annual_premium: self.annual_premium,
            car_brand: self.car_brand,
            car_model: self.car_model,
            car_year: self.car_year,
            license_plate: self.license_plate,
            full_name: self.full_name,
            date_of_birth: self.date_of_birth,
            address: self.address,
            phone: self.phone,
            email: self.email,
            driver_license_number: self.driver_license_number,
            payment_method: self.payment_method,
            policy_start_date: self.policy_start_date,
        }
    }
}
