//! Integration tests for the tool-layer contract
//!
//! Exercises the payload forms of the four operations the way an
//! orchestrating caller would: branch on the `error` key, read plain
//! JSON fields otherwise.

use interface_tools::InsuranceTools;
use rust_decimal_macros::dec;
use test_utils::{PurchaseRequestBuilder, QuotesRequestBuilder};

// ============================================================================
// get_insurance_quotes
// ============================================================================

#[test]
fn test_quotes_payload_neutral_driver_reference_values() {
    let payload = InsuranceTools::standard()
        .get_insurance_quotes_payload(&QuotesRequestBuilder::new().build());

    assert!(
        payload.get("error").is_none(),
        "valid request must not produce an error payload: {payload}"
    );

    let standard = payload["quotes"]["standard"]
        .as_array()
        .expect("standard tier present for 'all' selector");
    assert_eq!(standard.len(), 5, "all five insurers quote the standard tier");

    // GEICO's 0.95 multiplier on the floored $2000 makes it cheapest.
    assert_eq!(standard[0]["insurer"], "GEICO");
    assert_eq!(standard[0]["annual_premium"], "1900.00");

    let statefarm = standard
        .iter()
        .find(|q| q["insurer"] == "StateFarm")
        .expect("StateFarm quoted");
    assert_eq!(statefarm["annual_premium"], "2000.00");
    assert_eq!(statefarm["monthly_premium"], "166.67");
}

#[test]
fn test_quotes_payload_sorted_ascending_within_each_tier() {
    let payload = InsuranceTools::standard()
        .get_insurance_quotes_payload(&QuotesRequestBuilder::new().build());

    for (tier, quotes) in payload["quotes"].as_object().expect("tier map") {
        let premiums: Vec<&str> = quotes
            .as_array()
            .expect("quote list")
            .iter()
            .map(|q| q["annual_premium"].as_str().expect("decimal string"))
            .collect();

        let mut sorted: Vec<f64> = premiums.iter().map(|p| p.parse().unwrap()).collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let parsed: Vec<f64> = premiums.iter().map(|p| p.parse().unwrap()).collect();
        assert_eq!(parsed, sorted, "tier {tier} must be ascending by premium");
    }
}

#[test]
fn test_quotes_payload_premium_tier_lists_add_ons() {
    let payload = InsuranceTools::standard().get_insurance_quotes_payload(
        &QuotesRequestBuilder::new()
            .with_coverage_tier("premium")
            .build(),
    );

    let premium = payload["quotes"]["premium"].as_array().expect("premium tier");
    let travelers = premium
        .iter()
        .find(|q| q["insurer"] == "Travelers")
        .expect("Travelers quoted");

    assert_eq!(travelers["annual_premium"], "3150.00");
    let add_ons = travelers["add_ons"].as_array().expect("add-on names");
    assert_eq!(add_ons.len(), 6);
    assert_eq!(
        add_ons.last().unwrap(),
        "Concierge Claims Service (free)",
        "the complimentary feature is listed last and marked free"
    );
}

#[test]
fn test_quotes_payload_underage_driver_is_error() {
    let payload = InsuranceTools::standard().get_insurance_quotes_payload(
        &QuotesRequestBuilder::new().with_driver_age(17).build(),
    );

    assert_eq!(payload["error"], "Driver must be at least 18 years old");
    assert!(payload.get("quotes").is_none());
}

#[test]
fn test_quotes_payload_ineligible_driver_outranks_bad_tier() {
    // Both problems at once: driver eligibility is reported first
    let payload = InsuranceTools::standard().get_insurance_quotes_payload(
        &QuotesRequestBuilder::new()
            .with_driver_age(17)
            .with_coverage_tier("platinum")
            .build(),
    );

    assert_eq!(payload["error"], "Driver must be at least 18 years old");
}

#[test]
fn test_quotes_payload_unknown_tier_selector_is_error() {
    let payload = InsuranceTools::standard().get_insurance_quotes_payload(
        &QuotesRequestBuilder::new()
            .with_coverage_tier("platinum")
            .build(),
    );

    assert_eq!(payload["error"], "Unknown tier: platinum");
}

#[test]
fn test_quotes_payload_negative_experience_reports_skipped_insurers() {
    let payload = InsuranceTools::standard().get_insurance_quotes_payload(
        &QuotesRequestBuilder::new()
            .with_coverage_tier("standard")
            .with_license_years(-1)
            .build(),
    );

    assert!(payload.get("error").is_none());
    assert!(
        payload["quotes"]["standard"].as_array().unwrap().is_empty(),
        "no insurer can rate a negative driving history"
    );
    assert_eq!(payload["skipped"].as_array().unwrap().len(), 5);
    assert_eq!(
        payload["skipped"][0]["reason"],
        "Invalid input: License years cannot be negative"
    );
}

// ============================================================================
// get_available_addons
// ============================================================================

#[test]
fn test_addons_payload_matches_insurer_catalog() {
    let payload = InsuranceTools::standard().get_available_addons_payload("geico");

    assert_eq!(payload["insurer"], "GEICO");
    let add_ons = payload["available_add_ons"].as_array().expect("add-ons");
    assert_eq!(add_ons.len(), 2);
    assert_eq!(add_ons[0]["name"], "Roadside Assistance");
    assert_eq!(add_ons[0]["cost"], "50.00");
}

#[test]
fn test_addons_payload_includes_complimentary_feature() {
    let payload = InsuranceTools::standard().get_available_addons_payload("Travelers");

    let add_ons = payload["available_add_ons"].as_array().expect("add-ons");
    let free = add_ons.last().expect("Travelers has add-ons");
    assert_eq!(free["name"], "Concierge Claims Service");
    assert_eq!(free["cost"], "0.00");
    assert_eq!(free["complimentary"], true);
}

#[test]
fn test_addons_payload_unknown_insurer_is_error() {
    let payload = InsuranceTools::standard().get_available_addons_payload("Lemonade");

    assert_eq!(payload["error"], "Unknown insurer: Lemonade");
}

// ============================================================================
// purchase_policy
// ============================================================================

#[test]
fn test_purchase_payload_confirms_quoted_terms() {
    let payload = InsuranceTools::standard()
        .purchase_policy_payload(&PurchaseRequestBuilder::new().build());

    assert!(payload.get("error").is_none(), "valid purchase: {payload}");
    assert_eq!(payload["message"], "Policy purchased successfully");
    assert_eq!(payload["insurer"], "StateFarm");
    assert_eq!(payload["coverage"], "standard");
    assert_eq!(payload["annual_premium"], "2000.00");
    assert_eq!(payload["monthly_premium"], "166.67");
    assert_eq!(payload["vehicle"], "2022 Toyota Corolla");
    assert_eq!(payload["customer"], "Jordan Reyes");
    assert_eq!(payload["start_date"], "2026-09-01");

    let policy_number = payload["policy_number"].as_str().expect("policy number");
    assert!(
        policy_number.starts_with("STA-"),
        "prefix comes from the insurer display name: {policy_number}"
    );
    assert_eq!(policy_number.len(), 12);
}

#[test]
fn test_purchase_payload_unknown_insurer_is_error() {
    let payload = InsuranceTools::standard().purchase_policy_payload(
        &PurchaseRequestBuilder::new().with_insurer("Hippo").build(),
    );

    assert_eq!(payload["error"], "Unknown insurer: Hippo");
    assert!(payload.get("policy_number").is_none());
}

#[test]
fn test_purchase_payload_rejects_malformed_dates_and_methods() {
    let tools = InsuranceTools::standard();

    let bad_date = tools.purchase_policy_payload(
        &PurchaseRequestBuilder::new()
            .with_policy_start_date("09/01/2026")
            .build(),
    );
    assert_eq!(
        bad_date["error"],
        "Invalid input: policy_start_date must be an ISO date (YYYY-MM-DD)"
    );

    let bad_method = tools.purchase_policy_payload(
        &PurchaseRequestBuilder::new()
            .with_payment_method("cash")
            .build(),
    );
    assert_eq!(
        bad_method["error"],
        "Invalid input: Unknown payment method: cash"
    );
}

#[test]
fn test_purchase_payload_uses_quoted_premium_verbatim() {
    let payload = InsuranceTools::standard().purchase_policy_payload(
        &PurchaseRequestBuilder::new()
            .with_annual_premium(dec!(3150))
            .with_insurer("Travelers")
            .with_coverage_tier("premium")
            .build(),
    );

    assert_eq!(payload["annual_premium"], "3150.00");
    assert_eq!(payload["monthly_premium"], "262.50");
}

// ============================================================================
// reference_catalog
// ============================================================================

#[test]
fn test_catalog_payload_exports_full_reference_data() {
    let payload = InsuranceTools::standard().reference_catalog_payload();

    assert_eq!(payload["insurers"].as_array().unwrap().len(), 5);
    assert_eq!(payload["tiers"].as_array().unwrap().len(), 3);
    assert_eq!(payload["add_ons"].as_array().unwrap().len(), 5);

    let geico = &payload["insurers"][0];
    assert_eq!(geico["name"], "GEICO");
    assert_eq!(geico["multiplier"], "0.95");

    let liability = &payload["tiers"][0];
    assert_eq!(liability["id"], "liability");
    assert_eq!(liability["minimum_annual"], "700.00");
}
