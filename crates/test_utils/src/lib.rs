//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! insurance company test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built risks and timestamps
//! - `builders`: Builder for companies with a controllable clock
//! - `assertions`: Assertion helpers for money and policy errors
//! - `generators`: Property-based test data generators
//! - `logging`: Tracing subscriber for test runs

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
pub use logging::*;
