//! Wall-clock source used for line timestamps and file names

use chrono::{Local, NaiveDateTime};
use parking_lot::Mutex;

/// Source of local wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// The system's local clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to
///
/// # Examples
///
/// ```
/// use rust_rotating_logger::core::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let at = NaiveDate::from_ymd_opt(2026, 1, 31)
///     .unwrap()
///     .and_hms_opt(23, 10, 15)
///     .unwrap();
/// let clock = FixedClock::new(at);
/// assert_eq!(clock.now(), at);
/// ```
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    /// Create a clock frozen at `now`
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Move the clock forward by `by`
    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock()
    }
}
