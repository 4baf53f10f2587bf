//! Domain events for the policy aggregate
//!
//! Domain events record each successful change to a sold policy. They are
//! used for audit trails and for downstream consumers of sales data.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{PolicyId, RiskId};

/// Domain events emitted by the Policy aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyEvent {
    /// Policy has been sold
    PolicySold {
        policy_id: PolicyId,
        name_of_insured_object: String,
        valid_from: DateTime<Utc>,
        valid_till: DateTime<Utc>,
        risk_ids: Vec<RiskId>,
        premium: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// A risk was attached to the policy
    RiskAdded {
        policy_id: PolicyId,
        risk_id: RiskId,
        effective_from: DateTime<Utc>,
        premium: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// A risk was detached from the policy
    RiskRemoved {
        policy_id: PolicyId,
        risk_id: RiskId,
        effective_till: DateTime<Utc>,
        premium: Decimal,
        timestamp: DateTime<Utc>,
    },
}

impl PolicyEvent {
    /// Returns the policy ID associated with this event
    pub fn policy_id(&self) -> PolicyId {
        match self {
            PolicyEvent::PolicySold { policy_id, .. } => *policy_id,
            PolicyEvent::RiskAdded { policy_id, .. } => *policy_id,
            PolicyEvent::RiskRemoved { policy_id, .. } => *policy_id,
        }
    }

    /// Returns the timestamp of this event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            PolicyEvent::PolicySold { timestamp, .. } => *timestamp,
            PolicyEvent::RiskAdded { timestamp, .. } => *timestamp,
            PolicyEvent::RiskRemoved { timestamp, .. } => *timestamp,
        }
    }

    /// Returns the premium in effect after the event
    pub fn premium(&self) -> Decimal {
        match self {
            PolicyEvent::PolicySold { premium, .. } => *premium,
            PolicyEvent::RiskAdded { premium, .. } => *premium,
            PolicyEvent::RiskRemoved { premium, .. } => *premium,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            PolicyEvent::PolicySold { .. } => "PolicySold",
            PolicyEvent::RiskAdded { .. } => "RiskAdded",
            PolicyEvent::RiskRemoved { .. } => "RiskRemoved",
        }
    }
}
