//! Wall-clock access for date-dependent updates

use chrono::{NaiveDate, Utc};

/// Source of "today" for components that stamp due dates
///
/// The system clock reads the UTC calendar date, which is the date part of
/// an ISO-8601 timestamp. Tests use [`FixedClock`] to pin the date.
pub trait Clock: Send + Sync {
    /// The current calendar date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time (UTC)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock that always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
