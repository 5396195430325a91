//! Customization bundle handed to the dashboard shell

use crate::config::{AppConfig, CustomData};
use crate::core::{Clock, ConfigError, DashboardError, SystemClock};
use crate::host::dashboard::Dashboard;
use crate::host::registry::ComponentRegistry;
use std::path::Path;
use std::sync::Arc;

/// Configuration, component mapping and lookup data of one customer setup
#[derive(Debug)]
pub struct Customization {
    pub config: AppConfig,
    pub components: ComponentRegistry,
    pub data: CustomData,
}

impl Customization {
    pub fn new(config: AppConfig, components: ComponentRegistry) -> Self {
        let data = config.custom_data.clone();
        Self {
            config,
            components,
            data,
        }
    }

    /// Customization read from a YAML file, with the built-in panels
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = AppConfig::from_yaml_file(path)?;
        Ok(Self::new(config, ComponentRegistry::with_builtin_panels()))
    }

    /// Build the host on the system clock
    pub fn into_dashboard(self) -> Result<Dashboard, DashboardError> {
        self.into_dashboard_with_clock(Arc::new(SystemClock))
    }

    pub fn into_dashboard_with_clock(
        self,
        clock: Arc<dyn Clock>,
    ) -> Result<Dashboard, DashboardError> {
        Dashboard::new(self.config, self.components, clock)
    }
}

impl Default for Customization {
    /// The QuoinStone property-management setup
    fn default() -> Self {
        Self::new(
            AppConfig::default_config(),
            ComponentRegistry::with_builtin_panels(),
        )
    }
}
