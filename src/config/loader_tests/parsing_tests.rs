//! Tests for limits file parsing, version checks and override resolution.

use std::path::Path;

use crate::ChartRulesError;
use crate::config::{ConfigLoader, FileConfigLoader, load_preset, parse_config};
use crate::limits::DimensionRange;
use crate::visualization::VisualizationType;

use super::mock_fs::MockFileSystem;

fn load(content: &str) -> crate::Result<crate::limits::LimitsTable> {
    let fs = MockFileSystem::new().with_file("/project/limits.toml", content);
    FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/project/limits.toml"))
        .map(|result| result.limits)
}

#[test]
fn empty_file_equals_default_preset() {
    assert_eq!(load("").unwrap(), load_preset("default").unwrap());
}

#[test]
fn overrides_only_named_fields() {
    let limits = load(
        r#"
version = "1"
[charts.group_vertical_bar_chart]
second_multiselect_size = "2-8"
"#,
    )
    .unwrap();

    let builtin = load_preset("default").unwrap();
    let chart = VisualizationType::GroupVerticalBarChart;
    assert_eq!(
        limits.get(chart).second_multiselect_size,
        DimensionRange::between(2, 8).unwrap()
    );
    assert_eq!(
        limits.get(chart).first_multiselect_size,
        builtin.get(chart).first_multiselect_size
    );
}

#[test]
fn accepts_explicit_default_preset() {
    let limits = load("preset = \"default\"\n").unwrap();
    assert_eq!(limits, load_preset("default").unwrap());
}

#[test]
fn rejects_unknown_preset() {
    let err = load("preset = \"strict\"\n").unwrap_err();
    assert!(matches!(err, ChartRulesError::Config(_)));
    assert!(err.to_string().contains("Unknown preset: 'strict'"));
}

#[test]
fn rejects_unsupported_version() {
    let err = load("version = \"2\"\n").unwrap_err();
    assert!(err.to_string().contains("Unsupported config version '2'"));
}

#[test]
fn rejects_unknown_chart_key() {
    let err = load("[charts.bubble_chart]\ntime = \"1\"\n").unwrap_err();
    assert!(matches!(err, ChartRulesError::TomlParse(_)));
}

#[test]
fn rejects_unknown_limit_key() {
    let err = load("[charts.pie_chart]\ncolour = \"1\"\n").unwrap_err();
    assert!(matches!(err, ChartRulesError::TomlParse(_)));
}

#[test]
fn rejects_unknown_top_level_key() {
    let err = load("max_lines = 3\n").unwrap_err();
    assert!(matches!(err, ChartRulesError::TomlParse(_)));
}

#[test]
fn malformed_limit_names_its_key() {
    let err = load("[charts.table]\nmultiselect_product = \"lots\"\n").unwrap_err();
    match err {
        ChartRulesError::InvalidLimit { key, source } => {
            assert_eq!(key, "charts.table.multiselect_product");
            assert_eq!(
                source,
                crate::limits::RangeError::Malformed("lots".to_string())
            );
        }
        other => panic!("expected InvalidLimit, got {other:?}"),
    }
}

#[test]
fn inverted_range_names_its_key() {
    let err = load("[charts.pie_chart]\nfirst_multiselect_size = \"10-5\"\n").unwrap_err();
    assert!(matches!(
        err,
        ChartRulesError::InvalidLimit {
            ref key,
            source: crate::limits::RangeError::Invalid { min: 10, max: 5 },
        } if key == "charts.pie_chart.first_multiselect_size"
    ));
}

#[test]
fn limit_strings_are_case_insensitive_and_trimmed() {
    let limits = load("[charts.key_figure]\nmultiselect_count = \"  Not Allowed \"\n").unwrap();
    assert!(
        limits
            .get(VisualizationType::KeyFigure)
            .multiselect_count
            .is_not_allowed()
    );
}

#[test]
fn parse_config_keeps_chart_order_of_file() {
    let config = parse_config(
        r#"
[charts.table]
content = "ignore"

[charts.horizontal_bar_chart]
content = "1"

[charts.pie_chart]
content = "1"
"#,
    )
    .unwrap();

    let charts: Vec<_> = config.charts.keys().copied().collect();
    assert_eq!(
        charts,
        vec![
            VisualizationType::Table,
            VisualizationType::HorizontalBarChart,
            VisualizationType::PieChart
        ]
    );
}
