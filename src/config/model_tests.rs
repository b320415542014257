use super::*;

#[test]
fn parses_full_file() {
    let config: LimitsConfig = toml::from_str(
        r#"
version = "1"
preset = "default"

[charts.line_chart]
multiselect_count = "1-2"
multiselect_product = "1-20"

[charts.key_figure]
multiselect_count = "not allowed"
"#,
    )
    .unwrap();

    assert_eq!(config.version.as_deref(), Some("1"));
    assert_eq!(config.preset.as_deref(), Some("default"));
    let charts: Vec<_> = config.charts.keys().copied().collect();
    assert_eq!(
        charts,
        vec![VisualizationType::LineChart, VisualizationType::KeyFigure]
    );
    let line = &config.charts[&VisualizationType::LineChart];
    assert_eq!(line.multiselect_product.as_deref(), Some("1-20"));
    assert!(line.time.is_none());
}

#[test]
fn empty_file_is_empty_config() {
    let config: LimitsConfig = toml::from_str("").unwrap();
    assert_eq!(config, LimitsConfig::default());
}

#[test]
fn fields_list_every_limit_in_check_order() {
    let overrides = ChartLimitsConfig {
        time: Some("0-3".to_string()),
        ..ChartLimitsConfig::default()
    };
    let names: Vec<_> = overrides.fields().iter().map(|(name, _)| *name).collect();
    assert_eq!(names, crate::limits::ChartTypeLimits::FIELD_NAMES);
    assert_eq!(overrides.fields()[3], ("time", Some("0-3")));
}

#[test]
fn serializes_only_set_fields() {
    let mut config = LimitsConfig {
        version: Some(CONFIG_VERSION.to_string()),
        ..LimitsConfig::default()
    };
    config.charts.insert(
        VisualizationType::PieChart,
        ChartLimitsConfig {
            content: Some("1".to_string()),
            ..ChartLimitsConfig::default()
        },
    );
    let text = toml::to_string(&config).unwrap();
    assert!(text.contains("version = \"1\""));
    assert!(text.contains("pie_chart"));
    assert!(text.contains("content = \"1\""));
    assert!(!text.contains("preset"));
    assert!(!text.contains("time"));
}
