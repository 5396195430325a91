//! Dashboard host: component registry, event routing and rendering

pub mod component;
pub mod customization;
pub mod dashboard;
pub mod html;
pub mod registry;
pub mod view;

pub use component::{
    DashboardComponent, INVOICE_PROCESSING, InvoicePanel, OccupancyPanel, PROPERTY_OCCUPATION,
    UiEvent,
};
pub use customization::Customization;
pub use dashboard::{Dashboard, Snapshot};
pub use html::HtmlRenderer;
pub use registry::{ComponentFactory, ComponentRegistry};
pub use view::{Cell, Row, View};
