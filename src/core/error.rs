//! Typed error handling for the dashboard layer
//!
//! Tracker mutations never fail: an unmatched id is reported through
//! [`UpdateOutcome::NotFound`](crate::core::UpdateOutcome) and leaves the
//! collection untouched. Everything around the trackers (configuration,
//! event routing, rendering) reports failures through the types below so
//! callers can match on them instead of dealing with `anyhow::Error`.
//!
//! # Error Categories
//!
//! - [`DashboardError`]: top-level error returned by the host
//! - [`ConfigError`]: configuration parsing and validation
//! - [`ValidationError`]: user input that does not fit a component contract
//!
//! # Example
//!
//! ```rust,ignore
//! match dashboard.dispatch("invoiceProcessing", event) {
//!     Ok(UpdateOutcome::Updated) => {}
//!     Ok(UpdateOutcome::NotFound) => tracing::debug!("row vanished"),
//!     Err(DashboardError::UnknownComponent { tab_id }) => {
//!         eprintln!("no panel mounted for {}", tab_id);
//!     }
//!     Err(e) => eprintln!("{} ({})", e, e.error_code()),
//! }
//! ```

use thiserror::Error;

/// The main error type of the dashboard host
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Input that a component refused
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No component is mounted for the requested tab
    #[error("No component mounted for tab '{tab_id}'")]
    UnknownComponent { tab_id: String },

    /// The component does not handle this kind of event
    #[error("Component '{component}' does not handle {event} events")]
    UnsupportedEvent { component: String, event: String },

    /// Template rendering failed
    #[error("Failed to render '{component}': {message}")]
    Render { component: String, message: String },
}

impl DashboardError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DashboardError::Config(e) => e.error_code(),
            DashboardError::Validation(_) => "VALIDATION_ERROR",
            DashboardError::UnknownComponent { .. } => "UNKNOWN_COMPONENT",
            DashboardError::UnsupportedEvent { .. } => "UNSUPPORTED_EVENT",
            DashboardError::Render { .. } => "RENDER_ERROR",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading and validation
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The YAML document could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A required field is empty
    #[error("Config field '{field}' must not be empty")]
    MissingField { field: String },

    /// A color is not a `#RGB` or `#RRGGBB` hex value
    #[error("Invalid color for '{field}': '{value}'")]
    InvalidColor { field: String, value: String },

    /// Two entries share an identifier that must be unique
    #[error("Duplicate {kind} id '{id}'")]
    DuplicateId { kind: String, id: String },

    /// A chart definition is inconsistent with its data
    #[error("Invalid chart '{chart}': {message}")]
    InvalidChart { chart: String, message: String },

    /// A numeric setting is out of range
    #[error("Invalid value for '{field}': {message}")]
    OutOfRange { field: String, message: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
            ConfigError::Parse(_) => "CONFIG_PARSE_ERROR",
            ConfigError::MissingField { .. } => "CONFIG_MISSING_FIELD",
            ConfigError::InvalidColor { .. } => "CONFIG_INVALID_COLOR",
            ConfigError::DuplicateId { .. } => "CONFIG_DUPLICATE_ID",
            ConfigError::InvalidChart { .. } => "CONFIG_INVALID_CHART",
            ConfigError::OutOfRange { .. } => "CONFIG_OUT_OF_RANGE",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised when user input does not fit a component contract
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A selector value outside its fixed option set
    #[error("'{value}' is not a valid {field} (expected one of: {})", .expected.join(", "))]
    UnknownOption {
        field: String,
        value: String,
        expected: Vec<String>,
    },

    /// A record whose derived fields disagree with its state
    #[error("Inconsistent record {id}: {message}")]
    InconsistentRecord { id: u32, message: String },
}
