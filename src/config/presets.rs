use crate::error::{ChartRulesError, Result};
use crate::limits::LimitsTable;

use super::model::LimitsConfig;
use super::validation::apply_overrides;

/// Preset used when a limits file does not name one.
pub const DEFAULT_PRESET: &str = "default";

/// Available preset names.
pub const AVAILABLE_PRESETS: &[&str] = &[DEFAULT_PRESET];

/// TOML source of a built-in preset.
///
/// # Errors
/// Returns an error if the preset name is unknown.
pub fn preset_source(name: &str) -> Result<&'static str> {
    match name {
        DEFAULT_PRESET => Ok(PRESET_DEFAULT),
        _ => Err(ChartRulesError::Config(format!(
            "Unknown preset: '{}'. Available presets: {}",
            name,
            AVAILABLE_PRESETS.join(", ")
        ))),
    }
}

/// Load a built-in preset by name.
///
/// # Errors
/// Returns an error if the preset name is unknown or its limits do not parse.
pub fn load_preset(name: &str) -> Result<LimitsTable> {
    let content = preset_source(name)?;
    let config: LimitsConfig = toml::from_str(content)
        .map_err(|e| ChartRulesError::Config(format!("Failed to parse preset '{name}': {e}")))?;

    let mut table = LimitsTable::unconstrained();
    apply_overrides(&mut table, &config.charts)?;
    Ok(table)
}

const PRESET_DEFAULT: &str = r#"version = "1"

# Bars along a category axis
[charts.horizontal_bar_chart]
multiselect_count = "1"
content = "1"
content_units = "1"
time = "0-1"
first_multiselect_size = "2-30"
second_multiselect_size = "ignore"
multiselect_product = "ignore"

[charts.vertical_bar_chart]
multiselect_count = "1"
content = "1"
content_units = "1"
time = "0-30"
first_multiselect_size = "2-30"
second_multiselect_size = "ignore"
multiselect_product = "ignore"

# Grouped bars: one group per value of the largest dimension
[charts.group_horizontal_bar_chart]
multiselect_count = "2"
content = "1"
content_units = "1"
time = "0-1"
first_multiselect_size = "2-20"
second_multiselect_size = "2-5"
multiselect_product = "1-100"

[charts.group_vertical_bar_chart]
multiselect_count = "2"
content = "1"
content_units = "1"
time = "0-20"
first_multiselect_size = "2-20"
second_multiselect_size = "2-6"
multiselect_product = "1-60"

[charts.stacked_horizontal_bar_chart]
multiselect_count = "2"
content = "1"
content_units = "1"
time = "0-1"
first_multiselect_size = "2-20"
second_multiselect_size = "2-10"
multiselect_product = "ignore"

[charts.stacked_vertical_bar_chart]
multiselect_count = "2"
content = "1"
content_units = "1"
time = "0-30"
first_multiselect_size = "2-30"
second_multiselect_size = "2-10"
multiselect_product = "ignore"

[charts.percent_horizontal_bar_chart]
multiselect_count = "2"
content = "1"
content_units = "1"
time = "0-1"
first_multiselect_size = "2-20"
second_multiselect_size = "2-10"
multiselect_product = "ignore"

[charts.percent_vertical_bar_chart]
multiselect_count = "2"
content = "1"
content_units = "1"
time = "0-30"
first_multiselect_size = "2-30"
second_multiselect_size = "2-10"
multiselect_product = "ignore"

[charts.pie_chart]
multiselect_count = "1"
content = "1"
content_units = "1"
time = "0-1"
first_multiselect_size = "2-10"
second_multiselect_size = "ignore"
multiselect_product = "ignore"

# Population pyramid: an ordinal axis split into exactly two sides
[charts.pyramid_chart]
multiselect_count = "2"
content = "1"
content_units = "1"
time = "0-1"
first_multiselect_size = "3-100"
second_multiselect_size = "2"
multiselect_product = "ignore"

# The axis dimension does not count towards the product
[charts.line_chart]
multiselect_count = "1-2"
content = "1-10"
content_units = "1"
time = "ignore"
first_multiselect_size = "ignore"
second_multiselect_size = "ignore"
multiselect_product = "1-20"

[charts.scatter_plot]
multiselect_count = "2"
content = "2"
content_units = "ignore"
time = "0-1"
first_multiselect_size = "ignore"
second_multiselect_size = "ignore"
multiselect_product = "ignore"

[charts.table]
multiselect_count = "ignore"
content = "ignore"
content_units = "ignore"
time = "ignore"
first_multiselect_size = "1-1000"
second_multiselect_size = "1-1000"
multiselect_product = "1-10000"

[charts.key_figure]
multiselect_count = "not allowed"
content = "ignore"
content_units = "ignore"
time = "ignore"
first_multiselect_size = "ignore"
second_multiselect_size = "ignore"
multiselect_product = "ignore"
"#;

#[cfg(test)]
#[path = "presets_tests.rs"]
mod tests;
