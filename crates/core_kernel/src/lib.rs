//! Core Kernel - Foundational types for the insurance company
//!
//! This crate provides the building blocks used by the policy domain:
//! - Money with precise decimal arithmetic
//! - Validity periods with calendar-month arithmetic and whole-day counts
//! - Strongly-typed identifiers
//! - A clock abstraction so "now" can be injected

pub mod clock;
pub mod error;
pub mod identifiers;
pub mod money;
pub mod temporal;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CoreError;
pub use identifiers::{PolicyId, RiskId};
pub use money::{Money, MoneyError};
pub use temporal::{add_months, TemporalError, ValidPeriod};
