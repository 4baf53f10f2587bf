//! Premium calculation
//!
//! Premiums are prorated by whole days: the yearly prices of all insured
//! risks are summed, turned into a daily rate, and multiplied by the number
//! of whole days in the policy window. The window is always the policy's full
//! span, even when risks change part way through it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, ValidPeriod};

use crate::config::PricingConfig;
use crate::error::PolicyError;
use crate::risk::Risk;

/// The intermediate figures of a premium calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    /// Sum of the yearly prices of all risks
    pub yearly_total: Money,
    /// Rounded price per day
    pub daily_rate: Money,
    /// Whole days in the window
    pub days: i64,
    /// `daily_rate * days`
    pub premium: Money,
}

/// Sums the yearly prices of `risks`
pub fn yearly_total(risks: &[Risk]) -> Result<Money, PolicyError> {
    let total = risks
        .iter()
        .try_fold(Money::zero(), |acc, risk| acc.checked_add(&risk.yearly_price()))?;
    Ok(total)
}

/// Computes the daily rate for a set of risks
///
/// The quotient is rounded once, directly from full precision, with
/// midpoints going away from zero.
pub fn daily_rate(risks: &[Risk], config: &PricingConfig) -> Result<Money, PolicyError> {
    config.validate()?;
    let per_day = yearly_total(risks)?.checked_div(Decimal::from(config.days_per_year))?;
    Ok(per_day.round_half_away(config.rate_decimal_places))
}

/// Runs the full calculation and returns every intermediate figure
pub fn calculate(
    risks: &[Risk],
    period: &ValidPeriod,
    config: &PricingConfig,
) -> Result<PremiumBreakdown, PolicyError> {
    let yearly_total = yearly_total(risks)?;
    let daily_rate = daily_rate(risks, config)?;
    let days = period.whole_days();

    let premium = daily_rate.checked_mul(Decimal::from(days))?;

    Ok(PremiumBreakdown {
        yearly_total,
        daily_rate,
        days,
        premium,
    })
}

/// Computes the premium for `risks` over `period`
///
/// # Example
///
/// ```rust,ignore
/// // 120 + 140 a year over 30 days: round(260 / 365, 2) = 0.71, 0.71 * 30 = 21.30
/// let premium = calculate_premium(&[r1, r2], &period, &PricingConfig::default())?;
/// assert_eq!(premium.amount(), dec!(21.30));
/// ```
pub fn calculate_premium(
    risks: &[Risk],
    period: &ValidPeriod,
    config: &PricingConfig,
) -> Result<Money, PolicyError> {
    calculate(risks, period, config).map(|breakdown| breakdown.premium)
}
