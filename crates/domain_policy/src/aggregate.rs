//! Policy Aggregate Root
//!
//! The Policy aggregate is the consistency boundary for a sold contract.
//! It keeps the premium in step with the insured risks and records a domain
//! event for every change.
//!
//! # Invariants
//!
//! - The validity window is non-empty (`valid_from < valid_till`)
//! - A policy is sold with at least one risk; removals may later empty it
//! - The premium always equals the premium of the current risk set over the
//!   full validity window

use chrono::{DateTime, Utc};
use serde::Serialize;

use core_kernel::{Money, PolicyId, ValidPeriod};

use crate::config::PricingConfig;
use crate::error::PolicyError;
use crate::events::PolicyEvent;
use crate::premium::calculate_premium;
use crate::risk::Risk;

/// The Policy aggregate root
///
/// Policies are created only by the insurance company when it sells one,
/// and are never deleted. Risks are held by value, so later changes to the
/// company's catalog never reach a sold policy.
///
/// Only `Serialize` is derived: a policy can be exported but never rebuilt
/// from outside data, which would bypass the sale checks.
#[derive(Debug, Clone, Serialize)]
pub struct Policy {
    /// Unique policy identifier
    id: PolicyId,
    /// What is insured
    name_of_insured_object: String,
    /// Validity window, `[valid_from, valid_till]`
    validity: ValidPeriod,
    /// Premium for the whole window
    premium: Money,
    /// Insured risks in the order they were attached
    insured_risks: Vec<Risk>,
    /// Domain events to be published
    #[serde(skip)]
    events: Vec<PolicyEvent>,
    /// Incremented on every change after the sale
    version: u32,
    /// When the policy was sold
    sold_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Policy {
    /// Creates a freshly sold policy and prices it
    ///
    /// # Errors
    ///
    /// Returns an error if `risks` is empty or the premium cannot be computed
    pub(crate) fn sell(
        name_of_insured_object: String,
        validity: ValidPeriod,
        risks: Vec<Risk>,
        pricing: &PricingConfig,
        now: DateTime<Utc>,
    ) -> Result<Self, PolicyError> {
        if risks.is_empty() {
            return Err(PolicyError::SelectedRisksEmpty);
        }

        let premium = calculate_premium(&risks, &validity, pricing)?;
        let id = PolicyId::new_v7();

        let event = PolicyEvent::PolicySold {
            policy_id: id,
            name_of_insured_object: name_of_insured_object.clone(),
            valid_from: validity.start,
            valid_till: validity.end,
            risk_ids: risks.iter().map(Risk::id).collect(),
            premium: premium.amount(),
            timestamp: now,
        };

        Ok(Self {
            id,
            name_of_insured_object,
            validity,
            premium,
            insured_risks: risks,
            events: vec![event],
            version: 1,
            sold_at: now,
            updated_at: now,
        })
    }

    /// Returns the policy ID
    pub fn id(&self) -> PolicyId {
        self.id
    }

    /// Returns the name of the insured object
    pub fn name_of_insured_object(&self) -> &str {
        &self.name_of_insured_object
    }

    pub fn valid_from(&self) -> DateTime<Utc> {
        self.validity.start
    }

    pub fn valid_till(&self) -> DateTime<Utc> {
        self.validity.end
    }

    /// Returns the validity window
    pub fn validity(&self) -> &ValidPeriod {
        &self.validity
    }

    /// Returns the premium for the whole window
    pub fn premium(&self) -> Money {
        self.premium
    }

    /// Returns the insured risks
    pub fn insured_risks(&self) -> &[Risk] {
        &self.insured_risks
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn sold_at(&self) -> DateTime<Utc> {
        self.sold_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns accumulated domain events and clears them
    pub fn take_events(&mut self) -> Vec<PolicyEvent> {
        std::mem::take(&mut self.events)
    }

    /// Checks if the policy is in effect at `effective_date`, both ends inclusive
    pub fn covers(&self, effective_date: DateTime<Utc>) -> bool {
        self.validity.contains_inclusive(effective_date)
    }

    /// Checks if this policy is for `name` and its window overlaps `period`
    pub fn conflicts_with(&self, name: &str, period: &ValidPeriod) -> bool {
        self.name_of_insured_object == name && self.validity.overlaps(period)
    }

    /// Validates the date an endorsement takes effect
    ///
    /// The date may not lie before `now` and must fall inside the window.
    pub(crate) fn check_endorsement_date(
        &self,
        date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<(), PolicyError> {
        if date < now {
            return Err(PolicyError::EndorsementDateInPast);
        }
        if date < self.validity.start {
            return Err(PolicyError::EndorsementDateOutsidePolicy);
        }
        if date > self.validity.end {
            return Err(PolicyError::EndorsementDateOutsidePolicy);
        }
        Ok(())
    }

    /// Attaches a risk and reprices the whole window
    pub(crate) fn attach_risk(
        &mut self,
        risk: Risk,
        effective_from: DateTime<Utc>,
        pricing: &PricingConfig,
        now: DateTime<Utc>,
    ) -> Result<(), PolicyError> {
        let mut risks = self.insured_risks.clone();
        risks.push(risk.clone());
        let premium = calculate_premium(&risks, &self.validity, pricing)?;

        self.insured_risks = risks;
        self.premium = premium;
        self.touch(now);

        self.events.push(PolicyEvent::RiskAdded {
            policy_id: self.id,
            risk_id: risk.id(),
            effective_from,
            premium: premium.amount(),
            timestamp: now,
        });

        Ok(())
    }

    /// Detaches the first entry for `risk` and reprices the whole window
    ///
    /// # Errors
    ///
    /// Returns `RiskNotInPolicy` if the option is not insured
    pub(crate) fn detach_risk(
        &mut self,
        risk: &Risk,
        effective_till: DateTime<Utc>,
        pricing: &PricingConfig,
        now: DateTime<Utc>,
    ) -> Result<Risk, PolicyError> {
        let index = self
            .insured_risks
            .iter()
            .position(|r| r.is_same_option(risk))
            .ok_or(PolicyError::RiskNotInPolicy)?;

        let mut risks = self.insured_risks.clone();
        let removed = risks.remove(index);
        let premium = calculate_premium(&risks, &self.validity, pricing)?;

        self.insured_risks = risks;
        self.premium = premium;
        self.touch(now);

        self.events.push(PolicyEvent::RiskRemoved {
            policy_id: self.id,
            risk_id: removed.id(),
            effective_till,
            premium: premium.amount(),
            timestamp: now,
        });

        Ok(removed)
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.version += 1;
        self.updated_at = now;
    }
}
