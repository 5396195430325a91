//! Occupancy tracker: property records cycling between vacant and occupied
//!
//! Each record carries a status and the action that would move it to the
//! opposite status. The action is derived from the status on every read, so
//! the pair can never drift apart. Toggling a record flips its status and
//! stamps a fresh due date a few calendar months ahead of today.

use crate::core::calendar::{MonthOverflow, add_months};
use crate::core::error::ValidationError;
use crate::core::{Clock, UpdateOutcome};
use crate::trackers::Reducer;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy state of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OccupancyStatus {
    Vacant,
    Occupied,
}

impl OccupancyStatus {
    pub const ALL: [OccupancyStatus; 2] = [OccupancyStatus::Vacant, OccupancyStatus::Occupied];

    /// The opposite status
    pub fn flipped(self) -> Self {
        match self {
            OccupancyStatus::Vacant => OccupancyStatus::Occupied,
            OccupancyStatus::Occupied => OccupancyStatus::Vacant,
        }
    }

    /// The action that moves a property out of this status
    pub fn next_action(self) -> NextAction {
        match self {
            OccupancyStatus::Vacant => NextAction::Occupy,
            OccupancyStatus::Occupied => NextAction::Vacate,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OccupancyStatus::Vacant => "Vacant",
            OccupancyStatus::Occupied => "Occupied",
        }
    }
}

impl fmt::Display for OccupancyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action offered for a property, always the inverse of its status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NextAction {
    Occupy,
    Vacate,
}

impl NextAction {
    /// The status a property ends up in after this action
    pub fn target(self) -> OccupancyStatus {
        match self {
            NextAction::Occupy => OccupancyStatus::Occupied,
            NextAction::Vacate => OccupancyStatus::Vacant,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NextAction::Occupy => "Occupy",
            NextAction::Vacate => "Vacate",
        }
    }
}

impl fmt::Display for NextAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the due date is recomputed when a property changes hands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDatePolicy {
    /// Calendar months between the toggle and the new due date
    #[serde(default = "default_months_ahead")]
    pub months_ahead: u32,

    /// Day-of-month rule when the target month is shorter
    #[serde(default)]
    pub overflow: MonthOverflow,
}

fn default_months_ahead() -> u32 {
    3
}

impl Default for DueDatePolicy {
    fn default() -> Self {
        Self {
            months_ahead: default_months_ahead(),
            overflow: MonthOverflow::default(),
        }
    }
}

impl DueDatePolicy {
    /// Due date for a toggle performed on `today`
    pub fn due_from(&self, today: NaiveDate) -> Option<NaiveDate> {
        add_months(today, self.months_ahead, self.overflow)
    }
}

/// A property row of the occupancy table
///
/// The next action is not stored: [`PropertyRecord::next_action`] derives it
/// from the status, and the serialized form always carries the derived value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "PropertyRow", try_from = "PropertyRow")]
pub struct PropertyRecord {
    id: u32,
    name: String,
    status: OccupancyStatus,
    due_date: NaiveDate,
}

impl PropertyRecord {
    pub fn new(id: u32, name: impl Into<String>, status: OccupancyStatus, due_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            due_date,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> OccupancyStatus {
        self.status
    }

    pub fn next_action(&self) -> NextAction {
        self.status.next_action()
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Flip the status, restamping the due date when one can be computed
    fn toggle(&mut self, due_date: Option<NaiveDate>) {
        self.status = self.status.flipped();
        match due_date {
            Some(date) => self.due_date = date,
            None => tracing::warn!(
                property_id = self.id,
                "Due date out of range, keeping {}",
                self.due_date
            ),
        }
    }
}

/// Wire form of [`PropertyRecord`]
///
/// `next_action` is optional on input; when present it must agree with the
/// status.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PropertyRow {
    id: u32,
    name: String,
    status: OccupancyStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_action: Option<NextAction>,
    due_date: NaiveDate,
}

impl From<PropertyRecord> for PropertyRow {
    fn from(record: PropertyRecord) -> Self {
        let next_action = Some(record.next_action());
        Self {
            id: record.id,
            name: record.name,
            status: record.status,
            next_action,
            due_date: record.due_date,
        }
    }
}

impl TryFrom<PropertyRow> for PropertyRecord {
    type Error = ValidationError;

    fn try_from(row: PropertyRow) -> Result<Self, Self::Error> {
        if let Some(action) = row.next_action {
            if action != row.status.next_action() {
                return Err(ValidationError::InconsistentRecord {
                    id: row.id,
                    message: format!(
                        "next action '{}' does not match status '{}'",
                        action, row.status
                    ),
                });
            }
        }

        Ok(PropertyRecord::new(row.id, row.name, row.status, row.due_date))
    }
}

/// Action accepted by the occupancy tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyAction {
    /// Flip the occupancy of the property with this id
    Toggle { id: u32 },
}

/// Ordered collection of property records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OccupancyTracker {
    properties: Vec<PropertyRecord>,
    policy: DueDatePolicy,
}

impl OccupancyTracker {
    pub fn new(properties: Vec<PropertyRecord>, policy: DueDatePolicy) -> Self {
        Self { properties, policy }
    }

    /// Tracker holding the built-in sample properties
    pub fn seeded(policy: DueDatePolicy) -> Self {
        Self::new(seed_properties(), policy)
    }

    pub fn properties(&self) -> &[PropertyRecord] {
        &self.properties
    }

    pub fn policy(&self) -> DueDatePolicy {
        self.policy
    }

    pub fn get(&self, id: u32) -> Option<&PropertyRecord> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Flip the occupancy of one property and restamp its due date
    ///
    /// An unknown id leaves every record untouched.
    pub fn toggle_occupancy(&mut self, id: u32, today: NaiveDate) -> UpdateOutcome {
        let due_date = self.policy.due_from(today);
        let Some(property) = self.properties.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(property_id = id, "Toggle ignored, no such property");
            return UpdateOutcome::NotFound;
        };

        property.toggle(due_date);
        tracing::debug!(
            property_id = id,
            status = %property.status,
            due_date = %property.due_date,
            "Property occupancy toggled"
        );

        UpdateOutcome::Updated
    }
}

impl Reducer for OccupancyTracker {
    type Action = OccupancyAction;

    fn reduce(mut self, action: Self::Action, clock: &dyn Clock) -> (Self, UpdateOutcome) {
        let outcome = match action {
            OccupancyAction::Toggle { id } => self.toggle_occupancy(id, clock.today()),
        };
        (self, outcome)
    }
}

/// Sample properties shown when no seed is configured
pub fn seed_properties() -> Vec<PropertyRecord> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

    vec![
        PropertyRecord::new(1, "Shopping Center A", OccupancyStatus::Vacant, date(2023, 9, 15)),
        PropertyRecord::new(2, "Retail Space B", OccupancyStatus::Occupied, date(2023, 10, 1)),
        PropertyRecord::new(3, "Office Building C", OccupancyStatus::Vacant, date(2023, 9, 30)),
    ]
}
