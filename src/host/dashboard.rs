//! Dashboard host: mounts components under tabs, routes user events and
//! publishes render snapshots
//!
//! The host is the single owner of every mounted component. Each event is
//! applied synchronously; when it changes state the host renders every tab
//! and publishes the result on a `tokio::sync::watch` channel, so a renderer
//! always sees a complete snapshot and only ever the latest one.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut dashboard = Dashboard::new(AppConfig::default_config(), ComponentRegistry::with_builtin_panels(), Arc::new(SystemClock))?;
//! let mut snapshots = dashboard.subscribe();
//!
//! dashboard.dispatch("propertyOccupation", &UiEvent::Click { row: 1 })?;
//!
//! assert!(snapshots.has_changed()?);
//! let snapshot = snapshots.borrow_and_update().clone();
//! ```

use crate::config::{AppConfig, TabConfig};
use crate::core::{Clock, DashboardError, UpdateOutcome};
use crate::host::component::{DashboardComponent, UiEvent};
use crate::host::registry::ComponentRegistry;
use crate::host::view::View;
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

/// Everything a renderer needs for one pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Increases by one with every published change
    pub revision: u64,
    /// One view per configured tab, in tab order
    pub views: IndexMap<String, View>,
}

/// Host context for a customized dashboard
pub struct Dashboard {
    config: Arc<AppConfig>,
    registry: ComponentRegistry,
    mounted: IndexMap<String, Box<dyn DashboardComponent>>,
    clock: Arc<dyn Clock>,
    revision: u64,
    snapshots: watch::Sender<Snapshot>,
}

impl Dashboard {
    /// Validate the configuration and mount a component for every tab that
    /// has one
    ///
    /// Tabs without a registered component are shown as static
    /// placeholders; tabs whose feature is switched off stay unmounted.
    pub fn new(
        config: AppConfig,
        registry: ComponentRegistry,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DashboardError> {
        config.validate()?;

        let (snapshots, _) = watch::channel(Snapshot {
            revision: 0,
            views: IndexMap::new(),
        });

        let mut dashboard = Self {
            config: Arc::new(config),
            registry,
            mounted: IndexMap::new(),
            clock,
            revision: 0,
            snapshots,
        };

        let tab_ids: Vec<String> = dashboard.tabs().iter().map(|t| t.id.clone()).collect();
        for tab_id in &tab_ids {
            if dashboard.registry.contains(tab_id) {
                dashboard.mount_component(tab_id)?;
            } else {
                tracing::debug!(tab_id = %tab_id, "No component registered, tab is static");
            }
        }

        let views = dashboard.views();
        dashboard.snapshots.send_replace(Snapshot { revision: 0, views });

        tracing::info!(
            title = %dashboard.config.title,
            mounted = dashboard.mounted.len(),
            tabs = tab_ids.len(),
            "Dashboard ready"
        );

        Ok(dashboard)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn tabs(&self) -> &[TabConfig] {
        &self.config.dashboard.tabs
    }

    /// Ids of tabs with a live component, in mount order
    pub fn mounted_tabs(&self) -> Vec<&str> {
        self.mounted.keys().map(|k| k.as_str()).collect()
    }

    pub fn is_mounted(&self, tab_id: &str) -> bool {
        self.mounted.contains_key(tab_id)
    }

    /// Mount (or remount) the component of a tab with freshly seeded state
    ///
    /// Returns `Ok(false)` when the component's feature is switched off.
    pub fn mount(&mut self, tab_id: &str) -> Result<bool, DashboardError> {
        let mounted = self.mount_component(tab_id)?;
        if mounted {
            self.publish();
        }
        Ok(mounted)
    }

    /// Drop a tab's component and its state
    ///
    /// The tab falls back to its static placeholder. Returns `false` when
    /// nothing was mounted.
    pub fn unmount(&mut self, tab_id: &str) -> bool {
        let removed = self.mounted.shift_remove(tab_id).is_some();
        if removed {
            tracing::debug!(tab_id = %tab_id, "Component unmounted");
            self.publish();
        }
        removed
    }

    /// Render one tab
    pub fn render(&self, tab_id: &str) -> Result<View, DashboardError> {
        if let Some(component) = self.mounted.get(tab_id) {
            return Ok(component.render());
        }

        self.config
            .tab(tab_id)
            .map(placeholder)
            .ok_or_else(|| DashboardError::UnknownComponent {
                tab_id: tab_id.to_string(),
            })
    }

    /// Apply a user event to the component mounted under `tab_id`
    ///
    /// A snapshot is published only when a record was updated.
    pub fn dispatch(&mut self, tab_id: &str, event: &UiEvent) -> Result<UpdateOutcome, DashboardError> {
        let component =
            self.mounted
                .get_mut(tab_id)
                .ok_or_else(|| DashboardError::UnknownComponent {
                    tab_id: tab_id.to_string(),
                })?;

        let outcome = component.handle(event, self.clock.as_ref())?;
        tracing::debug!(tab_id = %tab_id, event = event.kind(), ?outcome, "Event dispatched");

        if outcome.is_updated() {
            self.publish();
        }
        Ok(outcome)
    }

    /// Receiver that always holds the latest snapshot
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.subscribe()
    }

    /// The most recently published snapshot
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    fn mount_component(&mut self, tab_id: &str) -> Result<bool, DashboardError> {
        let unknown = || DashboardError::UnknownComponent {
            tab_id: tab_id.to_string(),
        };

        if self.config.tab(tab_id).is_none() {
            return Err(unknown());
        }

        if let Some(feature) = self.registry.feature(tab_id) {
            if !self.config.features.is_enabled(feature) {
                tracing::warn!(tab_id = %tab_id, ?feature, "Feature disabled, component not mounted");
                return Ok(false);
            }
        }

        let component = self.registry.create(tab_id, &self.config).ok_or_else(unknown)?;
        self.mounted.insert(tab_id.to_string(), component);
        tracing::debug!(tab_id = %tab_id, "Component mounted");

        Ok(true)
    }

    fn views(&self) -> IndexMap<String, View> {
        self.tabs()
            .iter()
            .map(|tab| {
                let view = match self.mounted.get(&tab.id) {
                    Some(component) => component.render(),
                    None => placeholder(tab),
                };
                (tab.id.clone(), view)
            })
            .collect()
    }

    fn publish(&mut self) {
        self.revision += 1;
        let snapshot = Snapshot {
            revision: self.revision,
            views: self.views(),
        };
        self.snapshots.send_replace(snapshot);
    }
}

/// View of a tab that has no live component
fn placeholder(tab: &TabConfig) -> View {
    View {
        component: tab.id.clone(),
        title: tab.label.clone(),
        description: tab.description.clone(),
        columns: Vec::new(),
        rows: Vec::new(),
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("title", &self.config.title)
            .field("mounted", &self.mounted_tabs())
            .field("revision", &self.revision)
            .finish()
    }
}
