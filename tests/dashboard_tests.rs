//! Integration tests for the dashboard host

use quoin::prelude::*;

fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()))
}

fn dashboard() -> Dashboard {
    Customization::default()
        .into_dashboard_with_clock(clock())
        .unwrap()
}

#[test]
fn test_click_toggles_property_and_rerenders() {
    let mut dashboard = dashboard();

    let outcome = dashboard
        .dispatch(PROPERTY_OCCUPATION, &UiEvent::Click { row: 1 })
        .unwrap();

    assert_eq!(outcome, UpdateOutcome::Updated);
    let view = dashboard.render(PROPERTY_OCCUPATION).unwrap();
    assert_eq!(view.cell_text(1, "Status"), Some("Occupied"));
    assert_eq!(view.cell_text(1, "Next Action"), Some("Vacate"));
    assert_eq!(view.cell_text(1, "Due Date"), Some("2024-08-10"));
    assert_eq!(view.cell_text(2, "Status"), Some("Occupied"));
}

#[test]
fn test_select_sets_invoice_status() {
    let mut dashboard = dashboard();
    let event = UiEvent::Select {
        row: 3,
        value: "Paid".to_string(),
    };

    assert_eq!(
        dashboard.dispatch(INVOICE_PROCESSING, &event).unwrap(),
        UpdateOutcome::Updated
    );

    let view = dashboard.render(INVOICE_PROCESSING).unwrap();
    assert_eq!(view.cell_text(3, "Status"), Some("Paid"));
    assert_eq!(view.cell_text(3, "Amount"), Some("£6000"));
    assert_eq!(view.cell_text(3, "Due Date"), Some("2023-09-01"));
}

#[test]
fn test_wrong_event_kind_is_rejected() {
    let mut dashboard = dashboard();

    let err = dashboard
        .dispatch(INVOICE_PROCESSING, &UiEvent::Click { row: 1 })
        .unwrap_err();

    assert!(matches!(err, DashboardError::UnsupportedEvent { .. }));
    assert_eq!(
        err.to_string(),
        "Component 'invoiceProcessing' does not handle click events"
    );
}

#[test]
fn test_unmount_discards_state_and_remount_reseeds() {
    let mut dashboard = dashboard();
    dashboard
        .dispatch(PROPERTY_OCCUPATION, &UiEvent::Click { row: 1 })
        .unwrap();

    assert!(dashboard.unmount(PROPERTY_OCCUPATION));
    assert!(!dashboard.is_mounted(PROPERTY_OCCUPATION));
    assert!(!dashboard.unmount(PROPERTY_OCCUPATION));

    let placeholder = dashboard.render(PROPERTY_OCCUPATION).unwrap();
    assert!(placeholder.rows.is_empty());
    let err = dashboard
        .dispatch(PROPERTY_OCCUPATION, &UiEvent::Click { row: 1 })
        .unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_COMPONENT");

    assert!(dashboard.mount(PROPERTY_OCCUPATION).unwrap());
    let view = dashboard.render(PROPERTY_OCCUPATION).unwrap();
    assert_eq!(view.cell_text(1, "Status"), Some("Vacant"));
    assert_eq!(view.cell_text(1, "Due Date"), Some("2023-09-15"));
}

#[test]
fn test_tab_without_component_is_static() {
    let mut config = AppConfig::default_config();
    config.dashboard.tabs.push(TabConfig {
        id: "reports".to_string(),
        label: "Reports".to_string(),
        description: "Monthly summaries".to_string(),
        icon: Icon::BarChart,
    });
    let mut dashboard = Dashboard::new(config, ComponentRegistry::with_builtin_panels(), clock()).unwrap();

    assert!(!dashboard.is_mounted("reports"));
    assert_eq!(dashboard.render("reports").unwrap().description, "Monthly summaries");
    assert!(dashboard.mount("reports").is_err());
    assert!(dashboard.render("settings").is_err());
}

#[tokio::test]
async fn test_snapshots_follow_updates() {
    let mut dashboard = dashboard();
    let mut snapshots = dashboard.subscribe();
    assert_eq!(snapshots.borrow().revision, 0);

    dashboard
        .dispatch(PROPERTY_OCCUPATION, &UiEvent::Click { row: 3 })
        .unwrap();
    dashboard
        .dispatch(
            INVOICE_PROCESSING,
            &UiEvent::Select {
                row: 1,
                value: "Overdue".to_string(),
            },
        )
        .unwrap();

    snapshots.changed().await.unwrap();
    let snapshot = snapshots.borrow_and_update().clone();

    // Only the latest snapshot is kept
    assert_eq!(snapshot.revision, 2);
    assert_eq!(
        snapshot.views[PROPERTY_OCCUPATION].cell_text(3, "Status"),
        Some("Occupied")
    );
    assert_eq!(
        snapshot.views[INVOICE_PROCESSING].cell_text(1, "Status"),
        Some("Overdue")
    );
    assert!(!snapshots.has_changed().unwrap());
}

#[tokio::test]
async fn test_noop_dispatch_publishes_nothing() {
    let mut dashboard = dashboard();
    let snapshots = dashboard.subscribe();

    let outcome = dashboard
        .dispatch(
            INVOICE_PROCESSING,
            &UiEvent::Select {
                row: 999,
                value: "Paid".to_string(),
            },
        )
        .unwrap();

    assert_eq!(outcome, UpdateOutcome::NotFound);
    assert!(!snapshots.has_changed().unwrap());
    assert_eq!(dashboard.snapshot().revision, 0);
}

#[test]
fn test_html_render_of_live_panel() {
    let mut dashboard = dashboard();
    dashboard
        .dispatch(PROPERTY_OCCUPATION, &UiEvent::Click { row: 1 })
        .unwrap();

    let renderer = HtmlRenderer::new().unwrap();
    let view = dashboard.render(PROPERTY_OCCUPATION).unwrap();
    let html = renderer.render(&view, dashboard.config()).unwrap();

    assert!(html.contains("Property Occupation Management"));
    assert!(html.contains("<td>Shopping Center A</td>"));
    assert!(html.contains(">Vacate</button>"));
    assert!(html.contains("<td>2024-08-10</td>"));
}
