//! Policy issuance
//!
//! Synthesizes a confirmation record for a selected offer. The issuer
//! validates that the insurer exists but takes the tier and premium as the
//! caller quotes them: it confirms a previously quoted price, it does not
//! recompute it.

use chrono::NaiveDate;
use core_kernel::{Money, TierKind};
use domain_rating::tables::RateBook;
use rand::Rng;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IssuanceError;

/// Accepted payment methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    BankTransfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::DebitCard => "debit_card",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = IssuanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit_card" => Ok(PaymentMethod::CreditCard),
            "debit_card" => Ok(PaymentMethod::DebitCard),
            "bank_transfer" => Ok(PaymentMethod::BankTransfer),
            other => Err(IssuanceError::invalid_input(format!(
                "Unknown payment method: {other}"
            ))),
        }
    }
}

/// The insured vehicle's details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInfo {
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub license_plate: String,
}

impl VehicleInfo {
    /// "2022 Toyota Corolla" style description for display
    pub fn description(&self) -> String {
        format!("{} {} {}", self.year, self.brand, self.model)
    }
}

/// The policyholder's details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub driver_license_number: String,
}

/// Everything needed to issue a confirmation for a quoted offer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuanceRequest {
    /// Insurer id or display name
    pub insurer: String,
    pub tier: TierKind,
    /// Trusted as quoted; never re-derived
    pub annual_premium: Money,
    pub vehicle: VehicleInfo,
    pub customer: CustomerInfo,
    pub payment_method: PaymentMethod,
    pub start_date: NaiveDate,
}

/// The simulated policy confirmation
///
/// Ephemeral value object echoing the issuance terms. The policy number is
/// random; collisions across calls or process restarts are possible and
/// unhandled, as this core holds no policy registry.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyConfirmation {
    pub policy_number: String,
    pub insurer_name: String,
    pub tier: TierKind,
    pub annual_premium: Money,
    /// annual / 12, rounded to cents independently of the annual amount
    pub monthly_premium: Money,
    pub vehicle: VehicleInfo,
    pub customer: CustomerInfo,
    pub payment_method: PaymentMethod,
    pub start_date: NaiveDate,
}

/// Issues simulated policy confirmations against the rate book
#[derive(Debug, Clone, Copy)]
pub struct PolicyIssuer<'a> {
    rate_book: &'a RateBook,
}

impl<'a> PolicyIssuer<'a> {
    pub fn new(rate_book: &'a RateBook) -> Self {
        Self { rate_book }
    }

    /// Issues a confirmation for a previously quoted offer
    ///
    /// # Errors
    ///
    /// [`IssuanceError::UnknownInsurer`] if the insurer is not in the rate
    /// book. Tier and premium are not validated here by design.
    pub fn issue(&self, request: &IssuanceRequest) -> Result<PolicyConfirmation, IssuanceError> {
        let profile = self
            .rate_book
            .find_insurer(&request.insurer)
            .ok_or_else(|| IssuanceError::UnknownInsurer(request.insurer.clone()))?;

        let policy_number = generate_policy_number(&profile.name);
        let monthly_premium = (request.annual_premium / dec!(12)).round_to_cents();

        tracing::info!(
            insurer = %profile.id,
            tier = %request.tier,
            policy_number = %policy_number,
            "policy issued"
        );

        Ok(PolicyConfirmation {
            policy_number,
            insurer_name: profile.name.clone(),
            tier: request.tier,
            annual_premium: request.annual_premium,
            monthly_premium,
            vehicle: request.vehicle.clone(),
            customer: request.customer.clone(),
            payment_method: request.payment_method,
            start_date: request.start_date,
        })
    }
}

/// 3-letter uppercase insurer prefix plus an 8-digit random suffix,
/// e.g. "GEI-04871263"
fn generate_policy_number(insurer_name: &str) -> String {
    let prefix: String = insurer_name
        .chars()
        .take(3)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let suffix: u32 = rand::rng().random_range(0..100_000_000);
    format!("{prefix}-{suffix:08}")
}
