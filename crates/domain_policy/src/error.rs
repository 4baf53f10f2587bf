//! Policy domain errors
//!
//! Every rejection the insurance company produces is an invalid-argument
//! failure. The `Display` text of each variant is the exact message callers
//! see, so the strings here are part of the public contract.

use core_kernel::{MoneyError, TemporalError};
use thiserror::Error;

/// Errors that can occur in the policy domain
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// No risk list was supplied
    #[error("Selected risks can't be null.")]
    SelectedRisksMissing,

    /// An empty risk list was supplied
    #[error("Selected risks can't be empty.")]
    SelectedRisksEmpty,

    /// The risk is not an entry of the company's catalog
    #[error("This risk not from avaliable list.")]
    RiskNotAvailable,

    /// Policy would start in the past
    #[error("Valid from date can't be less than now.")]
    ValidFromInPast,

    #[error("Valid mounth can't be less than one.")]
    ValidMonthsTooShort,

    #[error("Name of insured object can't be null.")]
    InsuredObjectNameMissing,

    #[error("Name of insured object can't be empty.")]
    InsuredObjectNameEmpty,

    /// Another policy already covers the same object in an overlapping window
    #[error("Impossible sell some policy to one insured object in overlapping period.")]
    OverlappingPolicy,

    /// `valid_from + valid_months` cannot be represented
    #[error("Policy period is out of the supported date range.")]
    PeriodOutOfRange(#[from] TemporalError),

    /// No policy matched the insured object and effective date
    #[error("Impossible add risk to nonexistent policy.")]
    PolicyNotFound,

    /// Endorsement date lies before the current time
    #[error("Valid date must be equal to or greater than date now.")]
    EndorsementDateInPast,

    /// Endorsement date lies outside the policy window
    #[error("Valid date must be equal to or greater than date of policy.")]
    EndorsementDateOutsidePolicy,

    #[error("Can't remove nonexistent risk from policy.")]
    RiskNotInPolicy,

    /// Arithmetic failure while pricing
    #[error("Premium calculation error: {0}")]
    PremiumCalculation(String),

    /// Pricing configuration is unusable
    #[error("Invalid pricing configuration: {0}")]
    InvalidPricing(String),
}

impl PolicyError {
    /// Returns true for rejections caused by caller-supplied arguments
    ///
    /// Only arithmetic and configuration failures fall outside this kind.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(
            self,
            PolicyError::PremiumCalculation(_) | PolicyError::InvalidPricing(_)
        )
    }

    /// Returns the human-readable message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Creates a pricing configuration error
    pub fn invalid_pricing(message: impl Into<String>) -> Self {
        PolicyError::InvalidPricing(message.into())
    }
}

impl From<MoneyError> for PolicyError {
    fn from(error: MoneyError) -> Self {
        PolicyError::PremiumCalculation(error.to_string())
    }
}
