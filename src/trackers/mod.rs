//! Tracker state modules
//!
//! Each tracker owns an ordered collection of records and exposes a single
//! mutation. Mutations go through [`Reducer::reduce`], a value-in/value-out
//! transition that is independent of how the state is rendered.

pub mod invoice;
pub mod occupancy;

pub use invoice::{InvoiceAction, InvoiceRecord, InvoiceStatus, InvoiceTracker};
pub use occupancy::{
    DueDatePolicy, NextAction, OccupancyAction, OccupancyStatus, OccupancyTracker, PropertyRecord,
};

use crate::core::{Clock, UpdateOutcome};
use std::collections::HashSet;

/// Pure state transition over a tracker
///
/// An action that targets an unknown record returns the state unchanged
/// together with [`UpdateOutcome::NotFound`].
pub trait Reducer: Sized {
    type Action;

    fn reduce(self, action: Self::Action, clock: &dyn Clock) -> (Self, UpdateOutcome);
}

/// First id that occurs more than once, if any
pub(crate) fn first_duplicate_id(ids: impl IntoIterator<Item = u32>) -> Option<u32> {
    let mut seen = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_duplicate_id() {
        assert_eq!(first_duplicate_id([1, 2, 3]), None);
        assert_eq!(first_duplicate_id([1, 2, 1, 2]), Some(1));
        assert_eq!(first_duplicate_id(Vec::new()), None);
    }
}
