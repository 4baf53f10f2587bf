//! Pricing configuration

use serde::Deserialize;

use crate::error::PolicyError;

/// Parameters of the daily-rate proration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Divisor turning a yearly price into a daily rate
    pub days_per_year: u32,
    /// Decimal places the daily rate is rounded to
    pub rate_decimal_places: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            days_per_year: 365,
            rate_decimal_places: 2,
        }
    }
}

impl PricingConfig {
    /// Loads configuration from `PRICING_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("PRICING"))
            .build()?
            .try_deserialize()
    }

    /// Rejects values the premium calculation cannot work with
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.days_per_year == 0 {
            return Err(PolicyError::invalid_pricing("days_per_year must be positive"));
        }
        Ok(())
    }
}
