//! Custom Test Assertions
//!
//! Provides assertion helpers for domain types that give more meaningful
//! failure messages than standard assertions.

use core_kernel::Money;
use domain_policy::{Policy, PolicyError};
use rust_decimal::Decimal;

/// Asserts that a Money value has exactly the expected amount
pub fn assert_money_eq(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Money mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that an operation failed with exactly the given message
///
/// # Panics
///
/// Panics if the result is `Ok` or the message differs
pub fn assert_policy_error<T: std::fmt::Debug>(result: Result<T, PolicyError>, expected_message: &str) {
    match result {
        Ok(value) => panic!(
            "Expected error \"{}\", got Ok({:?})",
            expected_message, value
        ),
        Err(error) => {
            assert!(
                error.is_invalid_argument(),
                "Expected an invalid-argument error, got {:?}",
                error
            );
            assert_eq!(error.message(), expected_message);
        }
    }
}

/// Asserts that a policy insures exactly the named risks, in order
pub fn assert_insured_risk_names(policy: &Policy, expected: &[&str]) {
    let names: Vec<&str> = policy.insured_risks().iter().map(|r| r.name()).collect();
    assert_eq!(
        names, expected,
        "Insured risks mismatch for {}",
        policy.name_of_insured_object()
    );
}
