use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::visualization::VisualizationType;

/// Supported limits file version.
pub const CONFIG_VERSION: &str = "1";

/// Limits file as written on disk.
///
/// Every field is optional: charts and limits that are not mentioned keep the
/// value of the preset the file builds on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Built-in preset supplying the limits this file overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Per chart type overrides `[charts.<chart>]`.
    #[serde(default)]
    pub charts: IndexMap<VisualizationType, ChartLimitsConfig>,
}

/// Overrides for one chart type. Values are limit strings such as `"1-20"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartLimitsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiselect_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_units: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_multiselect_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_multiselect_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiselect_product: Option<String>,
}

impl ChartLimitsConfig {
    /// Field names paired with their configured values, in file order.
    pub(crate) fn fields(&self) -> [(&'static str, Option<&str>); 7] {
        [
            ("multiselect_count", self.multiselect_count.as_deref()),
            ("content", self.content.as_deref()),
            ("content_units", self.content_units.as_deref()),
            ("time", self.time.as_deref()),
            ("first_multiselect_size", self.first_multiselect_size.as_deref()),
            ("second_multiselect_size", self.second_multiselect_size.as_deref()),
            ("multiselect_product", self.multiselect_product.as_deref()),
        ]
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
