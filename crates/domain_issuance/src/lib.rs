//! Issuance Domain
//!
//! Turns a previously quoted offer into a simulated policy confirmation.
//! The issuer is deliberately a stateless confirmation generator, not a
//! transactional system: it validates the insurer, trusts the tier and
//! premium as quoted, synthesizes a policy number, and echoes the terms.
//! Nothing is persisted and policy numbers carry no cross-restart
//! uniqueness guarantee.

pub mod error;
pub mod issuer;

pub use error::IssuanceError;
pub use issuer::{
    CustomerInfo, IssuanceRequest, PaymentMethod, PolicyConfirmation, PolicyIssuer, VehicleInfo,
};
