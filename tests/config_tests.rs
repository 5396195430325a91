//! Integration tests for configuration loading and validation

use quoin::prelude::*;
use std::io::Write;

const MINIMAL_YAML: &str = r##"
title: Harbour Lettings
company_name: Harbour Group
primary_color: "#0F766E"
secondary_color: "#5EEAD4"
currency_symbol: "€"

dashboard:
  tabs:
    - id: propertyOccupation
      label: Units
      icon: home
  charts:
    unitStatus:
      type: pie
      data_keys: [value]
      colors: ["#0F766E"]
      data:
        - { name: Occupied, value: 12 }
        - { name: Vacant, value: 3 }

occupancy:
  due_date:
    months_ahead: 1
    overflow: clamp

seed:
  properties:
    - { id: 10, name: Quay Flat, status: Occupied, due_date: 2024-01-31 }
    - { id: 11, name: Dock Loft, status: Vacant, next_action: Occupy, due_date: 2024-02-15 }
"##;

#[test]
fn test_load_minimal_yaml_with_defaults() {
    let config = AppConfig::from_yaml_str(MINIMAL_YAML).unwrap();
    config.validate().unwrap();

    assert_eq!(config.currency_symbol, "€");
    assert!(config.features.invoice_processing);
    assert!(config.clients.is_empty());
    assert_eq!(config.custom_data, CustomData::default());
    assert_eq!(config.occupancy.due_date.overflow, MonthOverflow::Clamp);
    assert_eq!(config.chart("unitStatus").unwrap().series("value").len(), 2);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MINIMAL_YAML.as_bytes()).unwrap();

    let config = AppConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config.title, "Harbour Lettings");

    let customization = Customization::from_yaml_file(file.path()).unwrap();
    assert_eq!(customization.config, config);
}

#[test]
fn test_missing_file() {
    let err = AppConfig::from_yaml_file("/nonexistent/dashboard.yaml").unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_IO_ERROR");
}

#[test]
fn test_seeded_dashboard_uses_configured_records() {
    let config = AppConfig::from_yaml_str(MINIMAL_YAML).unwrap();
    let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    let mut dashboard =
        Dashboard::new(config, ComponentRegistry::with_builtin_panels(), Arc::new(clock)).unwrap();

    // Only the occupancy tab is configured
    assert_eq!(dashboard.mounted_tabs(), vec![PROPERTY_OCCUPATION]);

    dashboard
        .dispatch(PROPERTY_OCCUPATION, &UiEvent::Click { row: 10 })
        .unwrap();
    let view = dashboard.render(PROPERTY_OCCUPATION).unwrap();
    assert_eq!(view.cell_text(10, "Status"), Some("Vacant"));
    assert_eq!(view.cell_text(10, "Due Date"), Some("2024-02-29"));
}

#[test]
fn test_inconsistent_seed_record_is_rejected() {
    let yaml = MINIMAL_YAML.replace("next_action: Occupy", "next_action: Vacate");
    let err = AppConfig::from_yaml_str(&yaml).unwrap_err();

    assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
    assert!(err.to_string().contains("Inconsistent record 11"));
}

#[test]
fn test_invalid_colors_are_rejected() {
    let mut config = AppConfig::default_config();
    config.secondary_color = "#81CF8".to_string();

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidColor { ref field, .. } if field == "secondary_color"));
}

#[test]
fn test_duplicate_tab_ids_are_rejected() {
    let mut config = AppConfig::default_config();
    let duplicate = config.dashboard.tabs[0].clone();
    config.dashboard.tabs.push(duplicate);

    let err = config.validate().unwrap_err();
    assert_eq!(err.to_string(), "Duplicate tab id 'propertyOccupation'");
}

#[test]
fn test_duplicate_seed_ids_are_rejected() {
    let yaml = MINIMAL_YAML.replace("id: 11", "id: 10");
    let config = AppConfig::from_yaml_str(&yaml).unwrap();

    let err = config.validate().unwrap_err();
    assert_eq!(err.to_string(), "Duplicate property id '10'");
}

#[test]
fn test_chart_rows_must_match_data_keys() {
    let yaml = MINIMAL_YAML.replace("{ name: Vacant, value: 3 }", "{ name: Vacant, count: 3 }");
    let config = AppConfig::from_yaml_str(&yaml).unwrap();

    let err = config.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid chart 'unitStatus': row 1 is missing 'value'"
    );
}

#[test]
fn test_zero_months_ahead_is_rejected() {
    let yaml = MINIMAL_YAML.replace("months_ahead: 1", "months_ahead: 0");
    let config = AppConfig::from_yaml_str(&yaml).unwrap();

    assert_eq!(config.validate().unwrap_err().error_code(), "CONFIG_OUT_OF_RANGE");
}

#[test]
fn test_empty_title_is_rejected() {
    let mut config = AppConfig::default_config();
    config.title = "  ".to_string();

    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::MissingField { .. }
    ));
}
