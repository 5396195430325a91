//! Mountable dashboard components
//!
//! A component owns its state exclusively, renders it into a [`View`] and
//! applies user events to it. The two built-in panels wrap the trackers and
//! route every change through [`Reducer::reduce`].

use crate::config::AppConfig;
use crate::core::{Clock, DashboardError, UpdateOutcome};
use crate::host::view::{Cell, Row, View};
use crate::trackers::{
    InvoiceAction, InvoiceStatus, InvoiceTracker, OccupancyAction, OccupancyTracker, Reducer,
};
use serde::{Deserialize, Serialize};

/// Component key of the occupancy panel
pub const PROPERTY_OCCUPATION: &str = "propertyOccupation";
/// Component key of the invoice panel
pub const INVOICE_PROCESSING: &str = "invoiceProcessing";

/// A user interaction on a rendered row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// The row's button was clicked
    Click { row: u32 },
    /// The row's selector changed to `value`
    Select { row: u32, value: String },
}

impl UiEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            UiEvent::Click { .. } => "click",
            UiEvent::Select { .. } => "select",
        }
    }
}

/// A panel that can be mounted under a tab
pub trait DashboardComponent: Send {
    /// Key the component is registered under
    fn key(&self) -> &str;

    /// Render the current state
    fn render(&self) -> View;

    /// Apply a user event
    ///
    /// An event naming an unknown row is `Ok(UpdateOutcome::NotFound)` and
    /// leaves the state as it was.
    fn handle(&mut self, event: &UiEvent, clock: &dyn Clock)
    -> Result<UpdateOutcome, DashboardError>;
}

fn unsupported(component: &str, event: &UiEvent) -> DashboardError {
    DashboardError::UnsupportedEvent {
        component: component.to_string(),
        event: event.kind().to_string(),
    }
}

// =============================================================================
// Occupancy panel
// =============================================================================

/// "Property Occupation Management" table with a toggle button per row
#[derive(Debug, Clone)]
pub struct OccupancyPanel {
    tracker: OccupancyTracker,
}

impl OccupancyPanel {
    pub fn new(tracker: OccupancyTracker) -> Self {
        Self { tracker }
    }

    /// Panel seeded from the configuration (or the built-in samples)
    pub fn from_config(config: &AppConfig) -> Self {
        let policy = config.occupancy.due_date;
        let tracker = match &config.seed.properties {
            Some(properties) => OccupancyTracker::new(properties.clone(), policy),
            None => OccupancyTracker::seeded(policy),
        };
        Self::new(tracker)
    }

    pub fn tracker(&self) -> &OccupancyTracker {
        &self.tracker
    }
}

impl DashboardComponent for OccupancyPanel {
    fn key(&self) -> &str {
        PROPERTY_OCCUPATION
    }

    fn render(&self) -> View {
        let rows = self
            .tracker
            .properties()
            .iter()
            .map(|property| Row {
                key: property.id(),
                cells: vec![
                    Cell::plain(property.name()),
                    Cell::plain(property.status().as_str()),
                    Cell::plain(property.next_action().as_str()),
                    Cell::plain(property.due_date().format("%Y-%m-%d").to_string()),
                    Cell::Button {
                        label: property.next_action().to_string(),
                    },
                ],
            })
            .collect();

        View {
            component: PROPERTY_OCCUPATION.to_string(),
            title: "Property Occupation Management".to_string(),
            description: String::new(),
            columns: ["Property", "Status", "Next Action", "Due Date", "Action"]
                .map(String::from)
                .to_vec(),
            rows,
        }
    }

    fn handle(
        &mut self,
        event: &UiEvent,
        clock: &dyn Clock,
    ) -> Result<UpdateOutcome, DashboardError> {
        let UiEvent::Click { row } = event else {
            return Err(unsupported(PROPERTY_OCCUPATION, event));
        };

        let tracker = std::mem::take(&mut self.tracker);
        let (tracker, outcome) = tracker.reduce(OccupancyAction::Toggle { id: *row }, clock);
        self.tracker = tracker;
        Ok(outcome)
    }
}

// =============================================================================
// Invoice panel
// =============================================================================

/// "Invoice Processing" table with a status selector per row
#[derive(Debug, Clone)]
pub struct InvoicePanel {
    tracker: InvoiceTracker,
    currency_symbol: String,
}

impl InvoicePanel {
    pub fn new(tracker: InvoiceTracker, currency_symbol: impl Into<String>) -> Self {
        Self {
            tracker,
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Panel seeded from the configuration (or the built-in samples)
    pub fn from_config(config: &AppConfig) -> Self {
        let tracker = match &config.seed.invoices {
            Some(invoices) => InvoiceTracker::new(invoices.clone()),
            None => InvoiceTracker::seeded(),
        };
        Self::new(tracker, config.currency_symbol.clone())
    }

    pub fn tracker(&self) -> &InvoiceTracker {
        &self.tracker
    }
}

impl DashboardComponent for InvoicePanel {
    fn key(&self) -> &str {
        INVOICE_PROCESSING
    }

    fn render(&self) -> View {
        let options: Vec<String> = InvoiceStatus::ALL.iter().map(|s| s.to_string()).collect();

        let rows = self
            .tracker
            .invoices()
            .iter()
            .map(|invoice| Row {
                key: invoice.id,
                cells: vec![
                    Cell::plain(invoice.property.as_str()),
                    Cell::plain(invoice.formatted_amount(&self.currency_symbol)),
                    Cell::plain(invoice.status.as_str()),
                    Cell::plain(invoice.due_date.format("%Y-%m-%d").to_string()),
                    Cell::Select {
                        value: invoice.status.to_string(),
                        options: options.clone(),
                    },
                ],
            })
            .collect();

        View {
            component: INVOICE_PROCESSING.to_string(),
            title: "Invoice Processing".to_string(),
            description: String::new(),
            columns: ["Property", "Amount", "Status", "Due Date", "Action"]
                .map(String::from)
                .to_vec(),
            rows,
        }
    }

    fn handle(
        &mut self,
        event: &UiEvent,
        clock: &dyn Clock,
    ) -> Result<UpdateOutcome, DashboardError> {
        let UiEvent::Select { row, value } = event else {
            return Err(unsupported(INVOICE_PROCESSING, event));
        };

        let status: InvoiceStatus = value.parse()?;
        let tracker = std::mem::take(&mut self.tracker);
        let (tracker, outcome) = tracker.reduce(InvoiceAction::SetStatus { id: *row, status }, clock);
        self.tracker = tracker;
        Ok(outcome)
    }
}
