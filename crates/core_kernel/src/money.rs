//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of premium amounts using
//! rust_decimal for precise calculations without floating-point errors. The
//! quoting engine prices everything in US dollars; the type keeps the amount
//! at 4 internal decimal places so intermediate multiplier chains do not lose
//! precision before the final 2-decimal rounding.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// A US dollar amount
///
/// Amounts are stored with 4 decimal places internally; quoted premiums are
/// rounded to cents via [`Money::round_to_cents`], which uses banker's
/// rounding (round half to even) so repeated rounding does not drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal) -> Self {
        Self(amount.round_dp(4))
    }

    /// Creates Money from an integer amount of cents
    pub fn from_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, 2))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self(dec!(0.00))
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Rounds to whole cents using banker's rounding
    ///
    /// The result always carries exactly two decimal places, so a rounded
    /// amount serializes as "2000.00" rather than "2000".
    pub fn round_to_cents(&self) -> Self {
        let mut cents = self.0.round_dp(2);
        cents.rescale(2);
        Self(cents)
    }

    /// Returns the larger of this amount and `floor`
    pub fn max(&self, floor: Money) -> Self {
        if self.0 >= floor.0 {
            *self
        } else {
            floor
        }
    }

    /// Multiplies by a scalar (e.g., a tier or insurer multiplier)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.0 * factor)
    }

    /// Divides by a scalar
    pub fn divide(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::new(self.0 / divisor))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.0 - other.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

impl Div<Decimal> for Money {
    type Output = Self;

    fn div(self, divisor: Decimal) -> Self {
        self.divide(divisor)
            .expect("Division by zero in Money::div")
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// A fractional rate applied to a money amount
///
/// Used for the brand base rates, which express the annual premium as a
/// fraction of the vehicle value (e.g., 0.055 for Japanese brands).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(Decimal);

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.05 for 5%)
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Returns true if the rate is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Applies this rate to a money amount
    pub fn apply(&self, money: Money) -> Money {
        money.multiply(self.0)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * dec!(100)).round_dp(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(100.50));
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_from_cents() {
        let m = Money::from_cents(10050);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(100.00));
        let b = Money::new(dec!(50.00));

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
    }

    #[test]
    fn test_money_floor() {
        let premium = Money::new(dec!(1100));
        let minimum = Money::new(dec!(2000));

        assert_eq!(premium.max(minimum), minimum);
        assert_eq!(minimum.max(premium), minimum);
    }

    #[test]
    fn test_round_to_cents_bankers() {
        // 166.666... rounds up, 0.125 rounds half to even
        assert_eq!(
            Money::new(dec!(2000)).divide(dec!(12)).unwrap().round_to_cents(),
            Money::new(dec!(166.67))
        );
        assert_eq!(
            Money::new(dec!(0.125)).round_to_cents(),
            Money::new(dec!(0.12))
        );
    }

    #[test]
    fn test_division_by_zero() {
        let m = Money::new(dec!(100));
        assert_eq!(m.divide(dec!(0)), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_rate_application() {
        let rate = Rate::new(dec!(0.055));
        let value = Money::new(dec!(20000));

        assert_eq!(rate.apply(value).amount(), dec!(1100));
    }
}
