//! Injectable time source.
//!
//! Every "current time" read in this crate (orientation date check, opening
//! hours evaluation) goes through [`Clock`] rather than the system clock
//! directly, so the components stay deterministic under test.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// A source of civil (wall-clock) time.
pub trait Clock {
    /// Current civil date and time.
    fn now(&self) -> NaiveDateTime;

    /// Current civil date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Current time of day.
    fn time_of_day(&self) -> NaiveTime {
        self.now().time()
    }

    /// Current weekday.
    fn weekday(&self) -> Weekday {
        self.today().weekday()
    }
}

/// Production clock reading the process-local timezone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to a fixed instant, for tests and replay.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
