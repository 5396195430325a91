//! Component registry for mounting panels by tab id

use crate::config::{AppConfig, Feature};
use crate::host::component::{
    DashboardComponent, INVOICE_PROCESSING, InvoicePanel, OccupancyPanel, PROPERTY_OCCUPATION,
};
use indexmap::IndexMap;

/// Builds a fresh component from the configuration
pub type ComponentFactory = Box<dyn Fn(&AppConfig) -> Box<dyn DashboardComponent> + Send + Sync>;

struct ComponentEntry {
    factory: ComponentFactory,
    feature: Option<Feature>,
}

/// Registry of all mountable components
///
/// Each entry is keyed by the tab id it mounts under and may be tied to a
/// feature flag; a switched-off feature keeps the component from mounting.
#[derive(Default)]
pub struct ComponentRegistry {
    entries: IndexMap<String, ComponentEntry>,
}

impl ComponentRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Registry with the occupancy and invoice panels
    pub fn with_builtin_panels() -> Self {
        let mut registry = Self::new();
        registry.register(
            PROPERTY_OCCUPATION,
            Some(Feature::OccupancyTracking),
            Box::new(|config: &AppConfig| -> Box<dyn DashboardComponent> {
                Box::new(OccupancyPanel::from_config(config))
            }),
        );
        registry.register(
            INVOICE_PROCESSING,
            Some(Feature::InvoiceProcessing),
            Box::new(|config: &AppConfig| -> Box<dyn DashboardComponent> {
                Box::new(InvoicePanel::from_config(config))
            }),
        );
        registry
    }

    /// Register a component factory
    ///
    /// Registering the same key twice replaces the earlier factory.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        feature: Option<Feature>,
        factory: ComponentFactory,
    ) {
        self.entries
            .insert(key.into(), ComponentEntry { factory, feature });
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Feature flag gating a component, if any
    pub fn feature(&self, key: &str) -> Option<Feature> {
        self.entries.get(key).and_then(|entry| entry.feature)
    }

    /// Build a component, or `None` when the key is unknown
    pub fn create(&self, key: &str, config: &AppConfig) -> Option<Box<dyn DashboardComponent>> {
        self.entries.get(key).map(|entry| (entry.factory)(config))
    }

    /// All registered keys, in registration order
    pub fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(|s| s.as_str()).collect()
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_empty() {
        let registry = ComponentRegistry::new();
        assert!(registry.keys().is_empty());
    }

    #[test]
    fn test_default_registry_is_empty() {
        let registry = ComponentRegistry::default();
        assert!(registry.keys().is_empty());
    }

    #[test]
    fn test_builtin_panels() {
        let registry = ComponentRegistry::with_builtin_panels();

        assert_eq!(registry.keys(), vec![PROPERTY_OCCUPATION, INVOICE_PROCESSING]);
        assert_eq!(registry.feature(INVOICE_PROCESSING), Some(Feature::InvoiceProcessing));

        let component = registry
            .create(PROPERTY_OCCUPATION, &AppConfig::default_config())
            .unwrap();
        assert_eq!(component.key(), PROPERTY_OCCUPATION);
    }

    #[test]
    fn test_register_replaces_existing_key() {
        let mut registry = ComponentRegistry::with_builtin_panels();
        registry.register(
            PROPERTY_OCCUPATION,
            None,
            Box::new(|config: &AppConfig| -> Box<dyn DashboardComponent> {
                Box::new(InvoicePanel::from_config(config))
            }),
        );

        assert_eq!(registry.keys().len(), 2);
        assert_eq!(registry.feature(PROPERTY_OCCUPATION), None);
        let component = registry
            .create(PROPERTY_OCCUPATION, &AppConfig::default_config())
            .unwrap();
        assert_eq!(component.key(), INVOICE_PROCESSING);
    }

    #[test]
    fn test_create_unknown_key() {
        let registry = ComponentRegistry::with_builtin_panels();
        assert!(registry.create("reports", &AppConfig::default_config()).is_none());
    }
}
