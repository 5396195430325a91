//! Core module containing the shared building blocks of the dashboard layer

pub mod calendar;
pub mod clock;
pub mod error;

pub use calendar::{MonthOverflow, add_months};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, DashboardError, ValidationError};

use serde::{Deserialize, Serialize};

/// Result of a mutation addressed to a record by id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOutcome {
    /// A record matched and the new state was computed
    Updated,
    /// No record carries this id; the state is unchanged
    NotFound,
}

impl UpdateOutcome {
    pub fn is_updated(self) -> bool {
        matches!(self, UpdateOutcome::Updated)
    }
}
