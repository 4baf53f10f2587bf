//! Policy Domain
//!
//! This crate implements a small insurance company: it keeps a catalog of
//! sellable risks, sells policies for named insured objects, and lets risks
//! be attached to or detached from policies it has sold.
//!
//! # Architecture
//!
//! - **Aggregate**: [`Policy`] keeps its premium in step with its risks
//! - **Value Objects**: [`Risk`], [`PremiumBreakdown`]
//! - **Domain Service**: [`InsuranceCompany`] validates every request
//!   against the catalog and the sold policies
//! - **Domain Events**: PolicySold, RiskAdded, RiskRemoved
//!
//! # Pricing
//!
//! ```text
//! daily rate = round(sum of yearly prices / 365, 2)   (midpoints away from zero)
//! premium    = daily rate * whole days in the policy window
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{InsuranceCompany, Risk};
//!
//! let fire = Risk::new("Fire", Money::new(dec!(140)))?;
//! let mut company = InsuranceCompany::new("Acme");
//! company.set_available_risks(vec![fire.clone()]);
//!
//! let policy = company.sell_policy(Some("Office"), valid_from, 2, Some(&[fire]))?;
//! ```

pub mod aggregate;
pub mod company;
pub mod config;
pub mod error;
pub mod events;
pub mod premium;
pub mod risk;

pub use aggregate::Policy;
pub use company::InsuranceCompany;
pub use config::PricingConfig;
pub use error::PolicyError;
pub use events::PolicyEvent;
pub use premium::{calculate_premium, PremiumBreakdown};
pub use risk::{Risk, RiskCatalog};
