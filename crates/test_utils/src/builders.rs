//! Test Data Builders
//!
//! Provides a builder for insurance companies wired to a `FixedClock`, so
//! tests can move time without touching the wall clock.

use chrono::{DateTime, Utc};
use core_kernel::FixedClock;
use domain_policy::{InsuranceCompany, PricingConfig, Risk};

use crate::fixtures::TemporalFixtures;

/// Builder for constructing test companies
pub struct TestCompanyBuilder {
    name: String,
    now: DateTime<Utc>,
    risks: Vec<Risk>,
    pricing: PricingConfig,
}

impl Default for TestCompanyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCompanyBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            name: "TestCompany".to_string(),
            now: TemporalFixtures::now(),
            risks: Vec::new(),
            pricing: PricingConfig::default(),
        }
    }

    /// Sets the company name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the instant the clock starts at
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Adds a risk to the catalog
    pub fn with_risk(mut self, risk: Risk) -> Self {
        self.risks.push(risk);
        self
    }

    /// Adds several risks to the catalog
    pub fn with_risks(mut self, risks: impl IntoIterator<Item = Risk>) -> Self {
        self.risks.extend(risks);
        self
    }

    /// Sets the pricing configuration
    pub fn with_pricing(mut self, pricing: PricingConfig) -> Self {
        self.pricing = pricing;
        self
    }

    /// Builds the company and hands back a clock handle sharing its time
    pub fn build_with_clock(self) -> (InsuranceCompany<FixedClock>, FixedClock) {
        let clock = FixedClock::new(self.now);
        let mut company = InsuranceCompany::with_clock(self.name, clock.clone())
            .with_pricing(self.pricing)
            .expect("test pricing configuration is valid");
        company.set_available_risks(self.risks);
        (company, clock)
    }

    /// Builds the company
    pub fn build(self) -> InsuranceCompany<FixedClock> {
        self.build_with_clock().0
    }
}
