//! The insurance company service
//!
//! `InsuranceCompany` owns the catalog of sellable risks and every policy it
//! has sold. All operations validate their arguments against that state
//! before changing anything, so a rejected call never leaves a partial
//! mutation behind.

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use core_kernel::{Clock, RiskId, SystemClock, ValidPeriod};

use crate::aggregate::Policy;
use crate::config::PricingConfig;
use crate::error::PolicyError;
use crate::events::PolicyEvent;
use crate::risk::{Risk, RiskCatalog};

/// Service for selling and endorsing policies
///
/// The clock decides what "now" means for every date check. Production code
/// uses [`SystemClock`]; tests inject a `FixedClock`.
///
/// # Example
///
/// ```rust,ignore
/// let mut company = InsuranceCompany::new("Acme");
/// company.set_available_risks(vec![fire.clone()]);
///
/// let policy = company.sell_policy(Some("Office"), valid_from, 2, Some(&[fire]))?;
/// assert_eq!(policy.insured_risks().len(), 1);
/// ```
#[derive(Debug)]
pub struct InsuranceCompany<C: Clock = SystemClock> {
    name: String,
    available_risks: RiskCatalog,
    sold_policies: Vec<Policy>,
    pending_events: Vec<PolicyEvent>,
    pricing: PricingConfig,
    clock: C,
}

impl InsuranceCompany<SystemClock> {
    /// Creates a company that reads the wall clock
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_clock(name, SystemClock::new())
    }
}

impl<C: Clock> InsuranceCompany<C> {
    /// Creates a company with an injected clock and default pricing
    pub fn with_clock(name: impl Into<String>, clock: C) -> Self {
        Self {
            name: name.into(),
            available_risks: RiskCatalog::new(),
            sold_policies: Vec::new(),
            pending_events: Vec::new(),
            pricing: PricingConfig::default(),
            clock,
        }
    }

    /// Replaces the pricing configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidPricing` if the configuration fails validation
    pub fn with_pricing(mut self, pricing: PricingConfig) -> Result<Self, PolicyError> {
        pricing.validate()?;
        self.pricing = pricing;
        Ok(self)
    }

    /// Returns the company name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the catalog of risks that can currently be sold
    pub fn available_risks(&self) -> &RiskCatalog {
        &self.available_risks
    }

    /// Replaces the whole catalog
    ///
    /// Sold policies keep their own copies of risks and are not affected.
    pub fn set_available_risks<I>(&mut self, risks: I)
    where
        I: IntoIterator<Item = Risk>,
    {
        self.available_risks = RiskCatalog::from_risks(risks);
        info!(
            company = %self.name,
            risk_count = self.available_risks.len(),
            "Risk catalog replaced"
        );
    }

    /// Adds one option to the catalog; returns false if it was already listed
    pub fn add_available_risk(&mut self, risk: Risk) -> bool {
        let risk_id = risk.id();
        let inserted = self.available_risks.insert(risk);
        debug!(company = %self.name, %risk_id, inserted, "Catalog entry added");
        inserted
    }

    /// Withdraws an option from the catalog
    pub fn remove_available_risk(&mut self, risk_id: RiskId) -> Option<Risk> {
        let removed = self.available_risks.remove(risk_id);
        debug!(company = %self.name, %risk_id, removed = removed.is_some(), "Catalog entry removed");
        removed
    }

    /// Returns every sold policy in sale order
    pub fn sold_policies(&self) -> &[Policy] {
        &self.sold_policies
    }

    /// Drains the domain events of all operations since the last call
    pub fn take_events(&mut self) -> Vec<PolicyEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Sells a new policy
    ///
    /// Checks run in this order and the first failure is returned:
    /// 1. risks supplied, 2. risks non-empty, 3. every risk is a catalog
    /// option, 4. `valid_from` not before now, 5. at least one month,
    /// 6. name supplied, 7. name non-empty, 8. no overlapping policy for the
    /// same insured object.
    ///
    /// # Returns
    ///
    /// A snapshot of the sold policy. The company keeps the live copy.
    #[instrument(skip(self, selected_risks), fields(company = %self.name))]
    pub fn sell_policy(
        &mut self,
        name_of_insured_object: Option<&str>,
        valid_from: DateTime<Utc>,
        valid_months: i16,
        selected_risks: Option<&[Risk]>,
    ) -> Result<Policy, PolicyError> {
        self.try_sell_policy(name_of_insured_object, valid_from, valid_months, selected_risks)
            .inspect_err(|error| warn!(%error, "Policy sale rejected"))
    }

    fn try_sell_policy(
        &mut self,
        name_of_insured_object: Option<&str>,
        valid_from: DateTime<Utc>,
        valid_months: i16,
        selected_risks: Option<&[Risk]>,
    ) -> Result<Policy, PolicyError> {
        let selected = selected_risks.ok_or(PolicyError::SelectedRisksMissing)?;
        if selected.is_empty() {
            return Err(PolicyError::SelectedRisksEmpty);
        }
        if !selected.iter().all(|risk| self.available_risks.contains(risk)) {
            return Err(PolicyError::RiskNotAvailable);
        }

        let now = self.clock.now();
        if valid_from < now {
            return Err(PolicyError::ValidFromInPast);
        }
        if valid_months < 1 {
            return Err(PolicyError::ValidMonthsTooShort);
        }

        let name = require_name(name_of_insured_object)?;
        let validity = ValidPeriod::for_months(valid_from, u32::from(valid_months.unsigned_abs()))?;

        if self
            .sold_policies
            .iter()
            .any(|policy| policy.conflicts_with(name, &validity))
        {
            return Err(PolicyError::OverlappingPolicy);
        }

        let mut policy = Policy::sell(
            name.to_string(),
            validity,
            selected.to_vec(),
            &self.pricing,
            now,
        )?;
        self.pending_events.extend(policy.take_events());

        info!(
            policy_id = %policy.id(),
            insured_object = name,
            valid_till = %policy.valid_till(),
            premium = %policy.premium(),
            "Policy sold"
        );

        let snapshot = policy.clone();
        self.sold_policies.push(policy);
        Ok(snapshot)
    }

    /// Finds the policy for an insured object in effect at `effective_date`
    ///
    /// A policy is in effect when `valid_from <= effective_date <= valid_till`.
    ///
    /// # Returns
    ///
    /// The first matching policy in sale order, or `None`
    ///
    /// # Errors
    ///
    /// Returns an error only when the name is missing or empty
    pub fn get_policy(
        &self,
        name_of_insured_object: Option<&str>,
        effective_date: DateTime<Utc>,
    ) -> Result<Option<&Policy>, PolicyError> {
        let index = self.find_policy_index(name_of_insured_object, effective_date)?;
        Ok(index.map(|i| &self.sold_policies[i]))
    }

    /// Attaches a catalog risk to an existing policy
    ///
    /// The premium is recomputed over the policy's full window, not from
    /// `valid_from` onwards.
    #[instrument(skip(self, risk), fields(company = %self.name, risk_id = %risk.id()))]
    pub fn add_risk(
        &mut self,
        name_of_insured_object: Option<&str>,
        risk: &Risk,
        valid_from: DateTime<Utc>,
        effective_date: DateTime<Utc>,
    ) -> Result<(), PolicyError> {
        self.try_add_risk(name_of_insured_object, risk, valid_from, effective_date)
            .inspect_err(|error| warn!(%error, "Adding risk rejected"))
    }

    fn try_add_risk(
        &mut self,
        name_of_insured_object: Option<&str>,
        risk: &Risk,
        valid_from: DateTime<Utc>,
        effective_date: DateTime<Utc>,
    ) -> Result<(), PolicyError> {
        let index = self
            .find_policy_index(name_of_insured_object, effective_date)?
            .ok_or(PolicyError::PolicyNotFound)?;
        if !self.available_risks.contains(risk) {
            return Err(PolicyError::RiskNotAvailable);
        }

        let now = self.clock.now();
        let policy = &mut self.sold_policies[index];
        policy.check_endorsement_date(valid_from, now)?;
        policy.attach_risk(risk.clone(), valid_from, &self.pricing, now)?;
        self.pending_events.extend(policy.take_events());

        info!(
            policy_id = %policy.id(),
            premium = %policy.premium(),
            "Risk added to policy"
        );
        Ok(())
    }

    /// Detaches a risk from an existing policy
    ///
    /// Runs the same checks as [`add_risk`](Self::add_risk), with
    /// `valid_till` as the endorsement date, and then requires the risk to
    /// be insured by the policy.
    #[instrument(skip(self, risk), fields(company = %self.name, risk_id = %risk.id()))]
    pub fn remove_risk(
        &mut self,
        name_of_insured_object: Option<&str>,
        risk: &Risk,
        valid_till: DateTime<Utc>,
        effective_date: DateTime<Utc>,
    ) -> Result<(), PolicyError> {
        self.try_remove_risk(name_of_insured_object, risk, valid_till, effective_date)
            .inspect_err(|error| warn!(%error, "Removing risk rejected"))
    }

    fn try_remove_risk(
        &mut self,
        name_of_insured_object: Option<&str>,
        risk: &Risk,
        valid_till: DateTime<Utc>,
        effective_date: DateTime<Utc>,
    ) -> Result<(), PolicyError> {
        let index = self
            .find_policy_index(name_of_insured_object, effective_date)?
            .ok_or(PolicyError::PolicyNotFound)?;
        if !self.available_risks.contains(risk) {
            return Err(PolicyError::RiskNotAvailable);
        }

        let now = self.clock.now();
        let policy = &mut self.sold_policies[index];
        policy.check_endorsement_date(valid_till, now)?;
        policy.detach_risk(risk, valid_till, &self.pricing, now)?;
        self.pending_events.extend(policy.take_events());

        info!(
            policy_id = %policy.id(),
            premium = %policy.premium(),
            "Risk removed from policy"
        );
        Ok(())
    }

    fn find_policy_index(
        &self,
        name_of_insured_object: Option<&str>,
        effective_date: DateTime<Utc>,
    ) -> Result<Option<usize>, PolicyError> {
        let name = require_name(name_of_insured_object)?;
        let index = self
            .sold_policies
            .iter()
            .position(|policy| {
                policy.name_of_insured_object() == name && policy.covers(effective_date)
            });

        debug!(
            company = %self.name,
            insured_object = name,
            %effective_date,
            found = index.is_some(),
            "Policy lookup"
        );
        Ok(index)
    }
}

fn require_name(name_of_insured_object: Option<&str>) -> Result<&str, PolicyError> {
    let name = name_of_insured_object.ok_or(PolicyError::InsuredObjectNameMissing)?;
    if name.is_empty() {
        return Err(PolicyError::InsuredObjectNameEmpty);
    }
    Ok(name)
}
