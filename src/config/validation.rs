//! Turning a parsed limits file into a [`LimitsTable`].
//!
//! Checks the file version, starts from the selected preset and parses every
//! overriding limit string, reporting the first bad value by its key.

use indexmap::IndexMap;

use crate::error::{ChartRulesError, Result};
use crate::limits::{DimensionRange, LimitsTable};
use crate::visualization::VisualizationType;

use super::model::{CONFIG_VERSION, ChartLimitsConfig, LimitsConfig};
use super::presets::{DEFAULT_PRESET, load_preset};

/// Reject unsupported limits file versions. A missing version is accepted.
///
/// # Errors
/// Returns a configuration error naming the unsupported version.
pub fn validate_version(config: &LimitsConfig) -> Result<()> {
    match config.version.as_deref() {
        None | Some(CONFIG_VERSION) => Ok(()),
        Some(other) => Err(ChartRulesError::Config(format!(
            "Unsupported config version '{other}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

/// Resolve a parsed limits file into the effective table.
///
/// # Errors
/// Returns an error for an unsupported version, an unknown preset or a limit
/// string that does not parse.
pub fn resolve_limits(config: &LimitsConfig) -> Result<LimitsTable> {
    validate_version(config)?;
    let mut table = load_preset(config.preset.as_deref().unwrap_or(DEFAULT_PRESET))?;
    apply_overrides(&mut table, &config.charts)?;
    Ok(table)
}

/// Apply per chart overrides on top of `table`.
///
/// # Errors
/// Returns [`ChartRulesError::InvalidLimit`] for the first limit string that
/// does not parse, keyed as `charts.<chart>.<field>`.
pub fn apply_overrides(
    table: &mut LimitsTable,
    charts: &IndexMap<VisualizationType, ChartLimitsConfig>,
) -> Result<()> {
    for (chart, overrides) in charts {
        let mut limits = *table.get(*chart);
        for (field, value) in overrides.fields() {
            let Some(text) = value else {
                continue;
            };
            let range = DimensionRange::parse(text).map_err(|source| {
                ChartRulesError::InvalidLimit {
                    key: format!("charts.{chart}.{field}"),
                    source,
                }
            })?;
            if let Some(slot) = limits.field_mut(field) {
                *slot = range;
            }
        }
        table.insert(*chart, limits);
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
