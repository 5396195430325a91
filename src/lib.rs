//! # Quoin Dashboard
//!
//! Customization layer for a templated property-management dashboard.
//!
//! ## Features
//!
//! - **Configuration-Based**: branding, tabs, charts and clients defined in YAML
//! - **Occupancy Tracker**: properties cycling between vacant and occupied, with
//!   due dates restamped a few calendar months ahead
//! - **Invoice Tracker**: invoices whose payment status is picked from a fixed set
//! - **Pure Reducers**: every mutation is a value-in/value-out transition that
//!   reports `Updated` or `NotFound`
//! - **Host**: components mounted by tab id, render snapshots published on a
//!   watch channel, HTML output through `tera`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quoin::prelude::*;
//!
//! let mut dashboard = Customization::default().into_dashboard()?;
//!
//! // Click "Occupy" on the first property
//! dashboard.dispatch(PROPERTY_OCCUPATION, &UiEvent::Click { row: 1 })?;
//!
//! // Mark invoice 3 as paid
//! dashboard.dispatch(
//!     INVOICE_PROCESSING,
//!     &UiEvent::Select { row: 3, value: "Paid".into() },
//! )?;
//!
//! let html = HtmlRenderer::new()?.render(
//!     &dashboard.render(INVOICE_PROCESSING)?,
//!     dashboard.config(),
//! )?;
//! ```

pub mod config;
pub mod core;
pub mod host;
pub mod trackers;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Clock, ConfigError, DashboardError, FixedClock, MonthOverflow, SystemClock,
        UpdateOutcome, ValidationError, add_months,
    };

    // === Configuration ===
    pub use crate::config::{
        AppConfig, ChartConfig, ChartKind, ClientConfig, CustomData, Feature, FeatureFlags, Icon,
        TabConfig,
    };

    // === Trackers ===
    pub use crate::trackers::{
        DueDatePolicy, InvoiceAction, InvoiceRecord, InvoiceStatus, InvoiceTracker, NextAction,
        OccupancyAction, OccupancyStatus, OccupancyTracker, PropertyRecord, Reducer,
    };

    // === Host ===
    pub use crate::host::{
        Cell, ComponentRegistry, Customization, Dashboard, DashboardComponent, HtmlRenderer,
        INVOICE_PROCESSING, InvoicePanel, OccupancyPanel, PROPERTY_OCCUPATION, Row, Snapshot,
        UiEvent, View,
    };

    // Re-export common external types
    pub use chrono::NaiveDate;
    pub use std::sync::Arc;
}
