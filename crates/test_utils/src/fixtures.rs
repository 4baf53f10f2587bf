//! Pre-built Test Fixtures
//!
//! Provides ready-to-use risks and timestamps. Every call to a risk fixture
//! mints a new catalog option, so two calls never return the same risk.

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::Money;
use domain_policy::Risk;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for risk test data
pub struct RiskFixtures;

impl RiskFixtures {
    /// Creates a risk with the given name and yearly price
    pub fn risk(name: &str, yearly_price: Decimal) -> Risk {
        Risk::new(name, Money::new(yearly_price)).expect("fixture prices are non-negative")
    }

    /// Fire, 140 a year
    pub fn fire() -> Risk {
        Self::risk("Fire", dec!(140))
    }

    /// Water damage, 90 a year
    pub fn water() -> Risk {
        Self::risk("Water", dec!(90))
    }

    /// Theft, 120 a year
    pub fn theft() -> Risk {
        Self::risk("Theft", dec!(120))
    }

    /// A free risk, for zero-premium edge cases
    pub fn free() -> Risk {
        Self::risk("Courtesy", dec!(0))
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The frozen "now" used by test companies (Apr 1, 2024, a 30-day month)
    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap()
    }

    /// `days` after [`now`](Self::now)
    pub fn days_from_now(days: i64) -> DateTime<Utc> {
        Self::now() + Duration::days(days)
    }

    /// One second before [`now`](Self::now)
    pub fn just_before_now() -> DateTime<Utc> {
        Self::now() - Duration::seconds(1)
    }

    /// Jan 31 of a leap year, for month-end clamping
    pub fn end_of_january() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap()
    }
}
