//! Validity period handling
//!
//! Policies are valid over a bounded window measured in UTC. This module
//! provides the window type plus the two calendar calculations the pricing
//! rules depend on: adding whole calendar months and counting whole days.

use chrono::{DateTime, Duration, Months, Utc};
use serde::Serialize;
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must be before end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },

    #[error("Adding {months} months to {start} is out of range")]
    MonthOverflow {
        start: String,
        months: u32,
    },
}

/// Adds whole calendar months to a timestamp
///
/// The day of month is preserved where it exists and clamped to the last day
/// of the target month otherwise (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(start: DateTime<Utc>, months: u32) -> Result<DateTime<Utc>, TemporalError> {
    start
        .checked_add_months(Months::new(months))
        .ok_or_else(|| TemporalError::MonthOverflow {
            start: start.to_string(),
            months,
        })
}

/// Represents a bounded validity window
///
/// `start` is always strictly before `end` for periods built through
/// [`ValidPeriod::new`] or [`ValidPeriod::for_months`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidPeriod {
    /// Start of the valid period
    pub start: DateTime<Utc>,
    /// End of the valid period
    pub end: DateTime<Utc>,
}

impl ValidPeriod {
    /// Creates a new valid period
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TemporalError> {
        if start >= end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates a period spanning `months` calendar months from `start`
    pub fn for_months(start: DateTime<Utc>, months: u32) -> Result<Self, TemporalError> {
        let end = add_months(start, months)?;
        Self::new(start, end)
    }

    /// Half-open containment: `start <= timestamp < end`
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && timestamp < self.end
    }

    /// Closed containment: `start <= timestamp <= end`
    pub fn contains_inclusive(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }

    /// Half-open interval overlap
    pub fn overlaps(&self, other: &ValidPeriod) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns the duration of the period
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whole days between start and end, truncated
    pub fn whole_days(&self) -> i64 {
        self.duration().num_days()
    }
}
