//! Walks the four tool operations end to end on sample data and prints
//! each payload. Run with `RUST_LOG=debug` to watch the premium math.

use interface_tools::dto::{PurchaseRequest, QuotesRequest};
use interface_tools::InsuranceTools;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let tools = InsuranceTools::standard();

    let catalog = tools.reference_catalog_payload();
    println!("=== Reference catalog ===");
    println!("{}", serde_json::to_string_pretty(&catalog)?);

    let quotes = tools.get_insurance_quotes_payload(&QuotesRequest {
        car_brand: "Toyota".to_string(),
        car_value: Decimal::from(20_000),
        driver_age: 30,
        license_years: 10,
        coverage_tier: "all".to_string(),
    });
    println!("\n=== Quotes for a 30-year-old Toyota driver ===");
    println!("{}", serde_json::to_string_pretty(&quotes)?);

    let add_ons = tools.get_available_addons_payload("Travelers");
    println!("\n=== Travelers add-ons ===");
    println!("{}", serde_json::to_string_pretty(&add_ons)?);

    let purchase = tools.purchase_policy_payload(&PurchaseRequest {
        insurer_name: "StateFarm".to_string(),
        coverage_tier: "standard".to_string(),
        annual_premium: Decimal::from(2_000),
        car_brand: "Toyota".to_string(),
        car_model: "Corolla".to_string(),
        car_year: 2022,
        license_plate: "8ABC123".to_string(),
        full_name: "Jordan Reyes".to_string(),
        date_of_birth: "1996-04-12".to_string(),
        address: "482 Juniper Ave, Sacramento, CA".to_string(),
        phone: "+1-916-555-0147".to_string(),
        email: "jordan.reyes@example.com".to_string(),
        driver_license_number: "D1234567".to_string(),
        payment_method: "credit_card".to_string(),
        policy_start_date: "2026-09-01".to_string(),
    });
    println!("\n=== Purchase confirmation ===");
    println!("{}", serde_json::to_string_pretty(&purchase)?);

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
