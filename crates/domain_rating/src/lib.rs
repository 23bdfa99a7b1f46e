//! Rating Domain
//!
//! This crate implements the core pricing logic of the quoting engine:
//!
//! - **Rate tables**: immutable reference data (insurer profiles, coverage
//!   tiers, add-on catalog) validated once at construction
//! - **Classifier**: maps raw inputs (brand string, age, license years) to
//!   discrete rating brackets
//! - **Premium calculator**: composes bracket multipliers against the brand
//!   base rate to price one insurer/tier pair
//! - **Quote aggregator**: prices every insurer for one or all tiers and
//!   ranks the offers
//! - **Add-on resolver**: eligible add-ons and their cost per insurer
//!
//! All operations are synchronous, stateless functions over the injected
//! [`RateBook`]; quotes are transient value objects with no backing store.

pub mod addons;
pub mod aggregator;
pub mod calculator;
pub mod classifier;
pub mod error;
pub mod tables;

pub use addons::{AddOnLine, AddOnResolver};
pub use aggregator::{QuoteAggregator, QuoteSet, RankedQuote, SkippedQuote, TierSelector};
pub use calculator::{PremiumCalculator, Quote, QuoteRequest};
pub use classifier::{AgeBracket, BrandCategory, ExperienceBracket, MINIMUM_DRIVER_AGE};
pub use error::RatingError;
pub use tables::{AddOn, InsurerProfile, RateBook, SpecialFeature, TableError, TierDefinition};
