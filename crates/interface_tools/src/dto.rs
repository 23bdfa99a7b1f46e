//! Tool request and response DTOs
//!
//! Request fields arrive as the loose strings and numbers an orchestrating
//! agent extracts from conversation (tier codes, ISO date strings); the
//! tool layer parses them into domain types and maps domain results back
//! to plain payload shapes.

use chrono::NaiveDate;
use core_kernel::TierKind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Inputs for `get_insurance_quotes`
#[derive(Debug, Clone, Deserialize)]
pub struct QuotesRequest {
    pub car_brand: String,
    pub car_value: Decimal,
    pub driver_age: u32,
    pub license_years: i32,
    /// "liability", "standard", "premium", or "all"
    pub coverage_tier: String,
}

/// One ranked offer in a quotes payload
#[derive(Debug, Clone, Serialize)]
pub struct QuoteDto {
    pub insurer: String,
    pub reputation: String,
    pub annual_premium: Decimal,
    pub monthly_premium: Decimal,
    /// Present on the premium tier only
    pub add_ons: Vec<String>,
}

/// An insurer dropped from a tier, with the reason
#[derive(Debug, Clone, Serialize)]
pub struct SkippedDto {
    pub tier: TierKind,
    pub insurer: String,
    pub reason: String,
}

/// Quotes grouped by tier, each list ascending by annual premium
#[derive(Debug, Clone, Serialize)]
pub struct QuotesResponse {
    pub car_brand: String,
    pub car_value: Decimal,
    pub quotes: BTreeMap<TierKind, Vec<QuoteDto>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedDto>,
}

/// One add-on with its annual cost
#[derive(Debug, Clone, Serialize)]
pub struct AddOnDto {
    pub name: String,
    pub cost: Decimal,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub complimentary: bool,
}

/// Response for `get_available_addons`
#[derive(Debug, Clone, Serialize)]
pub struct AddonsResponse {
    pub insurer: String,
    pub available_add_ons: Vec<AddOnDto>,
}

/// Inputs for `purchase_policy`
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseRequest {
    pub insurer_name: String,
    pub coverage_tier: String,
    pub annual_premium: Decimal,
    pub car_brand: String,
    pub car_model: String,
    pub car_year: u16,
    pub license_plate: String,
    pub full_name: String,
    /// YYYY-MM-DD
    pub date_of_birth: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub driver_license_number: String,
    /// credit_card, debit_card, or bank_transfer
    pub payment_method: String,
    /// YYYY-MM-DD
    pub policy_start_date: String,
}

/// Confirmation payload for `purchase_policy`
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseResponse {
    pub message: String,
    pub policy_number: String,
    pub insurer: String,
    pub coverage: TierKind,
    pub annual_premium: Decimal,
    pub monthly_premium: Decimal,
    pub vehicle: String,
    pub customer: String,
    pub email: String,
    pub start_date: NaiveDate,
}

/// One insurer in the reference catalog
#[derive(Debug, Clone, Serialize)]
pub struct InsurerSummary {
    pub id: String,
    pub name: String,
    pub multiplier: Decimal,
    pub reputation: String,
    pub add_ons: Vec<String>,
}

/// One tier in the reference catalog
#[derive(Debug, Clone, Serialize)]
pub struct TierSummary {
    pub id: TierKind,
    pub name: String,
    pub price_multiplier: Decimal,
    pub minimum_annual: Decimal,
    pub includes: Vec<String>,
}

/// One catalog add-on in the reference catalog
#[derive(Debug, Clone, Serialize)]
pub struct CatalogAddOn {
    pub id: String,
    pub name: String,
    pub annual_cost: Decimal,
}

/// Read-only reference data export for callers presenting options
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub insurers: Vec<InsurerSummary>,
    pub tiers: Vec<TierSummary>,
    pub add_ons: Vec<CatalogAddOn>,
}
