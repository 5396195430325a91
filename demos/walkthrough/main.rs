//! Walkthrough of the QuoinStone dashboard customization
//!
//! Loads the configuration (from the YAML file given as first argument, or
//! the built-in default), clicks through both panels and prints the
//! resulting views.

use anyhow::Result;
use quoin::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let customization = match std::env::args().nth(1) {
        Some(path) => Customization::from_yaml_file(path)?,
        None => Customization::default(),
    };

    println!("🏢 {}\n", customization.config.title);

    let mut dashboard = customization.into_dashboard()?;
    let mut snapshots = dashboard.subscribe();
    let renderer = HtmlRenderer::new()?;

    for tab in dashboard.tabs() {
        println!("📑 {} ({}): {}", tab.label, tab.id, tab.description);
    }
    println!();

    // Occupy the first property, then try a property that does not exist
    for row in [1, 999] {
        let outcome = dashboard.dispatch(PROPERTY_OCCUPATION, &UiEvent::Click { row })?;
        println!("🔁 Toggle property {}: {:?}", row, outcome);
    }

    // Mark the overdue invoice as paid
    let outcome = dashboard.dispatch(
        INVOICE_PROCESSING,
        &UiEvent::Select {
            row: 3,
            value: InvoiceStatus::Paid.to_string(),
        },
    )?;
    println!("🧾 Invoice 3 -> Paid: {:?}\n", outcome);

    if snapshots.has_changed()? {
        let snapshot = snapshots.borrow_and_update().clone();
        println!("📸 Snapshot revision {}", snapshot.revision);
        println!("{}\n", serde_json::to_string_pretty(&snapshot)?);
    }

    for tab_id in dashboard.mounted_tabs() {
        let view = dashboard.render(tab_id)?;
        println!("{}", renderer.render(&view, dashboard.config())?);
    }

    for (name, chart) in dashboard.config().charts() {
        let key = chart.data_keys.first().map(String::as_str).unwrap_or("value");
        println!("📊 {} ({:?}): {:?}", name, chart.kind, chart.series(key));
    }

    Ok(())
}
