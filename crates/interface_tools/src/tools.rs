//! The four tool operations
//!
//! [`InsuranceTools`] owns a validated [`RateBook`] and exposes the public
//! function contract over it. Every operation is a synchronous pure
//! function over the immutable reference data; concurrent callers need no
//! coordination.

use chrono::NaiveDate;
use core_kernel::{Money, TierKind};
use domain_issuance::{
    CustomerInfo, IssuanceError, IssuanceRequest, PaymentMethod, PolicyIssuer, VehicleInfo,
};
use domain_rating::{AddOnResolver, QuoteAggregator, QuoteRequest, RateBook, RatingError, TierSelector};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::dto::{
    AddOnDto, AddonsResponse, CatalogAddOn, CatalogResponse, InsurerSummary, PurchaseRequest,
    PurchaseResponse, QuoteDto, QuotesRequest, QuotesResponse, SkippedDto, TierSummary,
};
use crate::error::{to_payload, ToolError};

static STANDARD_TOOLS: Lazy<InsuranceTools> =
    Lazy::new(|| InsuranceTools::new(RateBook::standard()));

/// The quoting core's public operations over an injected rate book
#[derive(Debug, Clone)]
pub struct InsuranceTools {
    rate_book: RateBook,
}

impl InsuranceTools {
    /// Creates a tool set over the given rate book
    pub fn new(rate_book: RateBook) -> Self {
        Self { rate_book }
    }

    /// The process-wide tool set over the standard rate book
    pub fn standard() -> &'static Self {
        &STANDARD_TOOLS
    }

    /// The underlying reference data
    pub fn rate_book(&self) -> &RateBook {
        &self.rate_book
    }

    /// Quotes every insurer for the selected tier(s), ranked by price
    pub fn get_insurance_quotes(
        &self,
        request: &QuotesRequest,
    ) -> Result<QuotesResponse, ToolError> {
        let domain_request = QuoteRequest {
            car_brand: request.car_brand.clone(),
            car_value: Money::new(request.car_value),
            driver_age: request.driver_age,
            license_years: request.license_years,
        };
        // Driver eligibility is reported ahead of a bad tier string
        domain_request.validate()?;
        let selector: TierSelector = request.coverage_tier.parse::<TierSelector>()?;

        let set = QuoteAggregator::new(&self.rate_book).quotes(&domain_request, selector)?;

        let quotes = set
            .by_tier
            .into_iter()
            .map(|(tier, ranked)| {
                let dtos = ranked
                    .into_iter()
                    .map(|quote| QuoteDto {
                        insurer: quote.insurer_name,
                        reputation: quote.reputation,
                        annual_premium: quote.annual_premium.amount(),
                        monthly_premium: quote.monthly_premium.amount(),
                        add_ons: quote.add_ons,
                    })
                    .collect();
                (tier, dtos)
            })
            .collect();

        Ok(QuotesResponse {
            car_brand: request.car_brand.clone(),
            car_value: request.car_value,
            quotes,
            skipped: set
                .skipped
                .into_iter()
                .map(|s| SkippedDto {
                    tier: s.tier,
                    insurer: s.insurer.to_string(),
                    reason: s.reason,
                })
                .collect(),
        })
    }

    /// Lists an insurer's add-ons with costs
    ///
    /// Unlike the domain resolver, an unknown insurer is an error at this
    /// boundary: the caller asked about a specific insurer and deserves a
    /// specific answer.
    pub fn get_available_addons(&self, insurer_name: &str) -> Result<AddonsResponse, ToolError> {
        let profile = self
            .rate_book
            .find_insurer(insurer_name)
            .ok_or_else(|| RatingError::unknown_insurer(insurer_name))?;

        let lines = AddOnResolver::new(&self.rate_book).list(&profile.id);

        Ok(AddonsResponse {
            insurer: profile.name.clone(),
            available_add_ons: lines
                .into_iter()
                .map(|line| AddOnDto {
                    name: line.name,
                    cost: line.cost.amount(),
                    complimentary: line.complimentary,
                })
                .collect(),
        })
    }

    /// Issues a simulated policy for a previously quoted offer
    pub fn purchase_policy(&self, request: &PurchaseRequest) -> Result<PurchaseResponse, ToolError> {
        let tier: TierKind = request.coverage_tier.parse().map_err(RatingError::from)?;
        let payment_method: PaymentMethod = request.payment_method.parse()?;
        let date_of_birth = parse_date(&request.date_of_birth, "date_of_birth")?;
        let start_date = parse_date(&request.policy_start_date, "policy_start_date")?;

        let issuance = IssuanceRequest {
            insurer: request.insurer_name.clone(),
            tier,
            annual_premium: Money::new(request.annual_premium).round_to_cents(),
            vehicle: VehicleInfo {
                brand: request.car_brand.clone(),
                model: request.car_model.clone(),
                year: request.car_year,
                license_plate: request.license_plate.clone(),
            },
            customer: CustomerInfo {
                full_name: request.full_name.clone(),
                date_of_birth,
                address: request.address.clone(),
                phone: request.phone.clone(),
                email: request.email.clone(),
                driver_license_number: request.driver_license_number.clone(),
            },
            payment_method,
            start_date,
        };

        let confirmation = PolicyIssuer::new(&self.rate_book).issue(&issuance)?;

        Ok(PurchaseResponse {
            message: "Policy purchased successfully".to_string(),
            policy_number: confirmation.policy_number,
            insurer: confirmation.insurer_name,
            coverage: confirmation.tier,
            annual_premium: confirmation.annual_premium.amount(),
            monthly_premium: confirmation.monthly_premium.amount(),
            vehicle: confirmation.vehicle.description(),
            customer: confirmation.customer.full_name,
            email: confirmation.customer.email,
            start_date: confirmation.start_date,
        })
    }

    /// Read-only export of the insurer, tier, and add-on reference data
    pub fn reference_catalog(&self) -> CatalogResponse {
        CatalogResponse {
            insurers: self
                .rate_book
                .insurers()
                .iter()
                .map(|profile| InsurerSummary {
                    id: profile.id.to_string(),
                    name: profile.name.clone(),
                    multiplier: profile.multiplier,
                    reputation: profile.reputation.clone(),
                    add_ons: AddOnResolver::new(&self.rate_book).display_names(&profile.id),
                })
                .collect(),
            tiers: TierKind::ALL
                .iter()
                .map(|&kind| {
                    let tier = self.rate_book.tier(kind);
                    TierSummary {
                        id: kind,
                        name: tier.name.clone(),
                        price_multiplier: tier.price_multiplier,
                        minimum_annual: tier.minimum_annual.amount(),
                        includes: tier.includes.clone(),
                    }
                })
                .collect(),
            add_ons: self
                .rate_book
                .add_ons()
                .iter()
                .map(|add_on| CatalogAddOn {
                    id: add_on.id.to_string(),
                    name: add_on.name.clone(),
                    annual_cost: add_on.annual_cost.amount(),
                })
                .collect(),
        }
    }

    /// Payload form of [`Self::get_insurance_quotes`]
    pub fn get_insurance_quotes_payload(&self, request: &QuotesRequest) -> Value {
        to_payload(self.get_insurance_quotes(request))
    }

    /// Payload form of [`Self::get_available_addons`]
    pub fn get_available_addons_payload(&self, insurer_name: &str) -> Value {
        to_payload(self.get_available_addons(insurer_name))
    }

    /// Payload form of [`Self::purchase_policy`]
    pub fn purchase_policy_payload(&self, request: &PurchaseRequest) -> Value {
        to_payload(self.purchase_policy(request))
    }

    /// Payload form of [`Self::reference_catalog`]
    pub fn reference_catalog_payload(&self) -> Value {
        to_payload(Ok(self.reference_catalog()))
    }
}

fn parse_date(input: &str, field: &str) -> Result<NaiveDate, ToolError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        IssuanceError::invalid_input(format!("{field} must be an ISO date (YYYY-MM-DD)")).into()
    })
}
