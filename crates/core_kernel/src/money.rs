//! Money types with precise decimal arithmetic
//!
//! Amounts are kept at full decimal precision. Rounding happens only where a
//! pricing rule asks for it, through [`Money::round_half_away`]. The company
//! trades in a single currency, so amounts carry no currency code.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of decimal places shown for currency amounts
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount
///
/// Arithmetic is checked: every operation that can leave the `Decimal`
/// range reports [`MoneyError::Overflow`] instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new Money value, keeping every decimal place given
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    pub fn zero() -> Self {
        Self { amount: Decimal::ZERO }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is below zero
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Rounds to `dp` places, midpoints away from zero (0.005 -> 0.01)
    pub fn round_half_away(&self, dp: u32) -> Self {
        Self {
            amount: self
                .amount
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
        }
    }

    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.amount
            .checked_add(other.amount)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Multiplies by a scalar (e.g., a number of days)
    pub fn checked_mul(&self, factor: Decimal) -> Result<Money, MoneyError> {
        self.amount
            .checked_mul(factor)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Divides by a scalar; the quotient is not rounded
    pub fn checked_div(&self, divisor: Decimal) -> Result<Money, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount
            .checked_div(divisor)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.dp$}",
            self.amount,
            dp = CURRENCY_DECIMAL_PLACES as usize
        )
    }
}
