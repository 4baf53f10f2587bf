//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::Money;
use domain_policy::Risk;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for yearly prices between 0.00 and 100,000.00
pub fn yearly_price_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for catalog risks with random prices
pub fn risk_strategy() -> impl Strategy<Value = Risk> {
    ("[A-Z][a-z]{2,10}", yearly_price_strategy()).prop_map(|(name, price)| {
        Risk::new(name, Money::new(price)).expect("generated prices are non-negative")
    })
}

/// Strategy for non-empty risk sets
pub fn risk_set_strategy() -> impl Strategy<Value = Vec<Risk>> {
    prop::collection::vec(risk_strategy(), 1..6)
}

/// Strategy for month counts a policy can be sold for
pub fn valid_months_strategy() -> impl Strategy<Value = i16> {
    1i16..=120i16
}

/// Strategy for month counts that must be rejected
pub fn invalid_months_strategy() -> impl Strategy<Value = i16> {
    i16::MIN..=0i16
}

/// Strategy for insured object names (never empty)
pub fn insured_object_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,20}"
}
