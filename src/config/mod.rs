//! Configuration loading and management
//!
//! [`AppConfig`] carries everything the dashboard shell needs that is not
//! behavior: branding, navigation tabs, chart definitions with their sample
//! data, the client list, feature flags and the tracker settings. It is
//! supplied whole at startup, either from YAML or from
//! [`AppConfig::default_config`].

use crate::core::error::ConfigError;
use crate::trackers::occupancy::{DueDatePolicy, PropertyRecord};
use crate::trackers::{InvoiceRecord, first_duplicate_id};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

/// Icon shown next to a navigation tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    BarChart,
    Settings,
    Users,
    Calendar,
    Phone,
    FileText,
    Clock,
    Mail,
}

/// A navigation tab; its id doubles as the component key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabConfig {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub icon: Icon,
}

/// Chart widget type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
}

/// Static chart definition with pre-baked sample data
///
/// Each data row has a label (`name` or `month`) plus one numeric value per
/// entry of `data_keys`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data_keys: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub data: Vec<IndexMap<String, serde_json::Value>>,
}

/// Keys accepted as the label of a chart row
const LABEL_KEYS: [&str; 2] = ["name", "month"];

impl ChartConfig {
    /// Label/value pairs for one data key, skipping rows without it
    pub fn series(&self, key: &str) -> Vec<(String, f64)> {
        self.data
            .iter()
            .filter_map(|row| {
                let label = LABEL_KEYS
                    .iter()
                    .find_map(|k| row.get(*k).and_then(|v| v.as_str()))?;
                let value = row.get(key)?.as_f64()?;
                Some((label.to_string(), value))
            })
            .collect()
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidChart {
            chart: name.to_string(),
            message,
        };

        if self.data_keys.is_empty() {
            return Err(invalid("no data keys declared".to_string()));
        }

        for (index, row) in self.data.iter().enumerate() {
            if !LABEL_KEYS.iter().any(|k| row.get(*k).is_some_and(|v| v.is_string())) {
                return Err(invalid(format!("row {} has no 'name' or 'month' label", index)));
            }

            for key in &self.data_keys {
                match row.get(key) {
                    Some(value) if value.is_number() => {}
                    Some(value) => {
                        return Err(invalid(format!(
                            "row {} has non-numeric '{}': {}",
                            index, key, value
                        )));
                    }
                    None => return Err(invalid(format!("row {} is missing '{}'", index, key))),
                }
            }
        }

        for color in &self.colors {
            check_color(&format!("{}.colors", name), color)?;
        }

        Ok(())
    }
}

/// Dashboard section: tabs and the overview charts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub tabs: Vec<TabConfig>,
    #[serde(default)]
    pub charts: IndexMap<String, ChartConfig>,
}

/// Analytics section: trend charts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub charts: IndexMap<String, ChartConfig>,
}

/// A client of the managing company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub id: String,
    pub name: String,
    pub industry: String,
}

/// Product features that can be switched off per deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    PropertyManagement,
    InvoiceProcessing,
    OccupancyTracking,
    ReportGeneration,
}

fn enabled() -> bool {
    true
}

/// Feature flags (all enabled unless stated otherwise)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default = "enabled")]
    pub property_management: bool,
    #[serde(default = "enabled")]
    pub invoice_processing: bool,
    #[serde(default = "enabled")]
    pub occupancy_tracking: bool,
    #[serde(default = "enabled")]
    pub report_generation: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            property_management: true,
            invoice_processing: true,
            occupancy_tracking: true,
            report_generation: true,
        }
    }
}

impl FeatureFlags {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::PropertyManagement => self.property_management,
            Feature::InvoiceProcessing => self.invoice_processing,
            Feature::OccupancyTracking => self.occupancy_tracking,
            Feature::ReportGeneration => self.report_generation,
        }
    }
}

/// Lookup lists offered to custom panels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomData {
    #[serde(default)]
    pub property_types: Vec<String>,
    #[serde(default)]
    pub invoice_statuses: Vec<String>,
    #[serde(default)]
    pub occupancy_statuses: Vec<String>,
}

impl Default for CustomData {
    fn default() -> Self {
        Self {
            property_types: to_strings(&["Retail", "Office", "Shopping Center", "Warehouse"]),
            invoice_statuses: to_strings(&["Pending", "Paid", "Overdue"]),
            occupancy_statuses: to_strings(&["Vacant", "Occupied"]),
        }
    }
}

/// Occupancy tracker settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OccupancyConfig {
    #[serde(default)]
    pub due_date: DueDatePolicy,
}

/// Optional replacement for the built-in sample records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<PropertyRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoices: Option<Vec<InvoiceRecord>>,
}

fn default_currency_symbol() -> String {
    "£".to_string()
}

/// Complete configuration of a customized dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub title: String,
    pub company_name: String,
    #[serde(default)]
    pub logo: String,
    pub primary_color: String,
    pub secondary_color: String,
    #[serde(default)]
    pub user_name: String,

    /// Prefix for invoice amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub clients: Vec<ClientConfig>,
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub custom_data: CustomData,
    #[serde(default)]
    pub occupancy: OccupancyConfig,
    #[serde(default)]
    pub seed: SeedData,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Serialize the configuration back to YAML
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the configuration for values the dashboard cannot display
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "title".to_string(),
            });
        }

        check_color("primary_color", &self.primary_color)?;
        check_color("secondary_color", &self.secondary_color)?;

        check_unique("tab", self.dashboard.tabs.iter().map(|t| t.id.as_str()))?;
        check_unique("client", self.clients.iter().map(|c| c.id.as_str()))?;

        for (name, chart) in self.charts() {
            chart.validate(name)?;
        }

        if self.occupancy.due_date.months_ahead == 0 {
            return Err(ConfigError::OutOfRange {
                field: "occupancy.due_date.months_ahead".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        let property_ids = self.seed.properties.iter().flatten().map(|p| p.id());
        if let Some(id) = first_duplicate_id(property_ids) {
            return Err(ConfigError::DuplicateId {
                kind: "property".to_string(),
                id: id.to_string(),
            });
        }

        let invoice_ids = self.seed.invoices.iter().flatten().map(|i| i.id);
        if let Some(id) = first_duplicate_id(invoice_ids) {
            return Err(ConfigError::DuplicateId {
                kind: "invoice".to_string(),
                id: id.to_string(),
            });
        }

        Ok(())
    }

    /// Find a tab by id
    pub fn tab(&self, id: &str) -> Option<&TabConfig> {
        self.dashboard.tabs.iter().find(|tab| tab.id == id)
    }

    /// Find a chart by name in the dashboard or analytics section
    pub fn chart(&self, name: &str) -> Option<&ChartConfig> {
        self.dashboard
            .charts
            .get(name)
            .or_else(|| self.analytics.charts.get(name))
    }

    /// All charts, dashboard section first
    pub fn charts(&self) -> impl Iterator<Item = (&str, &ChartConfig)> {
        self.dashboard
            .charts
            .iter()
            .chain(self.analytics.charts.iter())
            .map(|(name, chart)| (name.as_str(), chart))
    }

    /// The QuoinStone property-management customization
    pub fn default_config() -> Self {
        let mut dashboard_charts = IndexMap::new();
        dashboard_charts.insert(
            "propertyStatus".to_string(),
            chart(
                ChartKind::Pie,
                "value",
                &["#4F46E5", "#818CF8"],
                "name",
                &[("Occupied", 60), ("Vacant", 40)],
            ),
        );
        dashboard_charts.insert(
            "invoiceStatus".to_string(),
            chart(
                ChartKind::Bar,
                "count",
                &["#4F46E5"],
                "name",
                &[("Pending", 10), ("Paid", 15), ("Overdue", 5)],
            ),
        );

        let mut analytics_charts = IndexMap::new();
        analytics_charts.insert(
            "occupancyRate".to_string(),
            chart(
                ChartKind::Line,
                "rate",
                &["#4F46E5"],
                "month",
                &[("Jan", 80), ("Feb", 85), ("Mar", 82), ("Apr", 88)],
            ),
        );
        analytics_charts.insert(
            "invoiceProcessingTime".to_string(),
            chart(
                ChartKind::Bar,
                "days",
                &["#818CF8"],
                "month",
                &[("Jan", 5), ("Feb", 4), ("Mar", 3), ("Apr", 3)],
            ),
        );

        Self {
            title: "QuoinStone Property Management".to_string(),
            company_name: "QuoinStone Group".to_string(),
            logo: "/path/to/quoinstone-logo.png".to_string(),
            primary_color: "#4F46E5".to_string(),
            secondary_color: "#818CF8".to_string(),
            user_name: "Tim Struth".to_string(),
            currency_symbol: default_currency_symbol(),
            dashboard: DashboardConfig {
                tabs: vec![
                    TabConfig {
                        id: "propertyOccupation".to_string(),
                        label: "Property Occupation".to_string(),
                        description: "Manage property occupation cycles".to_string(),
                        icon: Icon::Home,
                    },
                    TabConfig {
                        id: "invoiceProcessing".to_string(),
                        label: "Invoice Processing".to_string(),
                        description: "Process and track invoices".to_string(),
                        icon: Icon::FileText,
                    },
                ],
                charts: dashboard_charts,
            },
            analytics: AnalyticsConfig {
                charts: analytics_charts,
            },
            clients: vec![
                client("client1", "Major Retail Chain", "Retail"),
                client("client2", "Office Space Inc", "Commercial Real Estate"),
                client("client3", "Shopping Mall Group", "Retail"),
            ],
            features: FeatureFlags::default(),
            custom_data: CustomData::default(),
            occupancy: OccupancyConfig::default(),
            seed: SeedData::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

fn check_color(field: &str, value: &str) -> Result<(), ConfigError> {
    static HEX_COLOR: OnceLock<Regex> = OnceLock::new();
    let regex = HEX_COLOR.get_or_init(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}){1,2}$").unwrap());

    if regex.is_match(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidColor {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

fn check_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ConfigError::DuplicateId {
                kind: kind.to_string(),
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn client(id: &str, name: &str, industry: &str) -> ClientConfig {
    ClientConfig {
        id: id.to_string(),
        name: name.to_string(),
        industry: industry.to_string(),
    }
}

fn chart(
    kind: ChartKind,
    data_key: &str,
    colors: &[&str],
    label_key: &str,
    points: &[(&str, i64)],
) -> ChartConfig {
    let data = points
        .iter()
        .map(|(label, value)| {
            let mut row = IndexMap::new();
            row.insert(label_key.to_string(), serde_json::Value::from(*label));
            row.insert(data_key.to_string(), serde_json::Value::from(*value));
            row
        })
        .collect();

    ChartConfig {
        kind,
        data_keys: vec![data_key.to_string()],
        colors: to_strings(colors),
        data,
    }
}
