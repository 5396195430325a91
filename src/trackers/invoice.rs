//! Invoice tracker: invoice records with a user-selected payment status

use crate::core::error::ValidationError;
use crate::core::{Clock, UpdateOutcome};
use crate::trackers::Reducer;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payment status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    /// Selector options, in display order
    pub const ALL: [InvoiceStatus; 3] = [
        InvoiceStatus::Pending,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InvoiceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownOption {
                field: "invoice status".to_string(),
                value: s.to_string(),
                expected: InvoiceStatus::ALL.iter().map(|st| st.to_string()).collect(),
            })
    }
}

/// An invoice row of the invoice table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub id: u32,
    /// Free-text property label
    pub property: String,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub due_date: NaiveDate,
}

impl InvoiceRecord {
    pub fn new(
        id: u32,
        property: impl Into<String>,
        amount: f64,
        status: InvoiceStatus,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            property: property.into(),
            amount,
            status,
            due_date,
        }
    }

    /// Amount prefixed with a currency symbol
    ///
    /// Whole amounts print without decimals (`£5000`), others with two
    /// (`£5000.50`).
    pub fn formatted_amount(&self, currency_symbol: &str) -> String {
        if self.amount.fract() == 0.0 {
            format!("{}{:.0}", currency_symbol, self.amount)
        } else {
            format!("{}{:.2}", currency_symbol, self.amount)
        }
    }
}

/// Action accepted by the invoice tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceAction {
    /// Replace the status of the invoice with this id
    SetStatus { id: u32, status: InvoiceStatus },
}

/// Ordered collection of invoice records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceTracker {
    invoices: Vec<InvoiceRecord>,
}

impl InvoiceTracker {
    pub fn new(invoices: Vec<InvoiceRecord>) -> Self {
        Self { invoices }
    }

    /// Tracker holding the built-in sample invoices
    pub fn seeded() -> Self {
        Self::new(seed_invoices())
    }

    pub fn invoices(&self) -> &[InvoiceRecord] {
        &self.invoices
    }

    pub fn get(&self, id: u32) -> Option<&InvoiceRecord> {
        self.invoices.iter().find(|inv| inv.id == id)
    }

    /// Set the status of one invoice; amount and due date are left as they are
    pub fn set_status(&mut self, id: u32, status: InvoiceStatus) -> UpdateOutcome {
        match self.invoices.iter_mut().find(|inv| inv.id == id) {
            Some(invoice) => {
                invoice.status = status;
                tracing::debug!(invoice_id = id, %status, "Invoice status set");
                UpdateOutcome::Updated
            }
            None => {
                tracing::debug!(invoice_id = id, "Status change ignored, no such invoice");
                UpdateOutcome::NotFound
            }
        }
    }
}

impl Reducer for InvoiceTracker {
    type Action = InvoiceAction;

    fn reduce(mut self, action: Self::Action, _clock: &dyn Clock) -> (Self, UpdateOutcome) {
        let outcome = match action {
            InvoiceAction::SetStatus { id, status } => self.set_status(id, status),
        };
        (self, outcome)
    }
}

/// Sample invoices shown when no seed is configured
pub fn seed_invoices() -> Vec<InvoiceRecord> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

    vec![
        InvoiceRecord::new(1, "Property A", 5000.0, InvoiceStatus::Pending, date(2023, 9, 30)),
        InvoiceRecord::new(2, "Property B", 7500.0, InvoiceStatus::Paid, date(2023, 9, 15)),
        InvoiceRecord::new(3, "Property C", 6000.0, InvoiceStatus::Overdue, date(2023, 9, 1)),
    ]
}
