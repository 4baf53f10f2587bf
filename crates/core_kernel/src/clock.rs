//! Clock abstraction
//!
//! Business rules compare dates against "now". Reading the wall clock
//! directly makes those rules untestable, so services take a [`Clock`].

use chrono::{DateTime, Duration, Utc};
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

/// Source of the current time
pub trait Clock: Debug {
    /// Returns the current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by `Utc::now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock
///
/// All clones share the same time value, so a test can hand one clone to a
/// service and keep another to move time forward.
///
/// ```
/// use core_kernel::{Clock, FixedClock};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
/// let clock = FixedClock::new(start);
/// let shared = clock.clone();
///
/// shared.advance(Duration::days(2));
/// assert_eq!(clock.now(), start + Duration::days(2));
/// ```
#[derive(Debug, Clone)]
pub struct FixedClock {
    current_time: Arc<Mutex<DateTime<Utc>>>,
}

impl FixedClock {
    /// Creates a clock frozen at `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current_time: Arc::new(Mutex::new(start)),
        }
    }

    /// Moves the clock forward (or backward, for a negative duration)
    pub fn advance(&self, duration: Duration) {
        let mut time = self
            .current_time
            .lock()
            .expect("FixedClock mutex poisoned");
        *time += duration;
    }

    /// Sets the clock to a specific instant
    pub fn set(&self, instant: DateTime<Utc>) {
        let mut time = self
            .current_time
            .lock()
            .expect("FixedClock mutex poisoned");
        *time = instant;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self
            .current_time
            .lock()
            .expect("FixedClock mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock::new();
        let t1 = clock.now();
        let t2 = clock.now();

        assert!(t2 >= t1);
    }

    #[test]
    fn test_fixed_clock() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let clock = FixedClock::new(start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::hours(5));
        assert_eq!(clock.now(), start + Duration::hours(5));

        let later = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        clock.set(later);
        assert_eq!(clock.now(), later);
    }
}
