mod range;

pub use range::{DimensionRange, RangeError, RangeViolation};

use indexmap::IndexMap;
use serde::Serialize;

use crate::visualization::VisualizationType;

/// Configured limits for one chart type.
///
/// Loaded once at startup and shared read-only by every evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChartTypeLimits {
    /// Number of dimensions with more than one selected value.
    pub multiselect_count: DimensionRange,
    /// Number of selected content values.
    pub content: DimensionRange,
    /// Number of distinct units among the selected content values.
    pub content_units: DimensionRange,
    /// Number of selected time periods.
    pub time: DimensionRange,
    /// Size of the largest multiselect dimension.
    pub first_multiselect_size: DimensionRange,
    /// Size of the second largest multiselect dimension.
    pub second_multiselect_size: DimensionRange,
    /// Product of the sizes of the multiselect dimensions.
    pub multiselect_product: DimensionRange,
}

impl ChartTypeLimits {
    /// Limits that accept any selection.
    pub const UNCONSTRAINED: Self = Self {
        multiselect_count: DimensionRange::Ignore,
        content: DimensionRange::Ignore,
        content_units: DimensionRange::Ignore,
        time: DimensionRange::Ignore,
        first_multiselect_size: DimensionRange::Ignore,
        second_multiselect_size: DimensionRange::Ignore,
        multiselect_product: DimensionRange::Ignore,
    };

    /// Limit names as used in the limits file, in check order.
    pub const FIELD_NAMES: [&'static str; 7] = [
        "multiselect_count",
        "content",
        "content_units",
        "time",
        "first_multiselect_size",
        "second_multiselect_size",
        "multiselect_product",
    ];

    /// Every limit paired with its name.
    #[must_use]
    pub const fn fields(&self) -> [(&'static str, DimensionRange); 7] {
        [
            (Self::FIELD_NAMES[0], self.multiselect_count),
            (Self::FIELD_NAMES[1], self.content),
            (Self::FIELD_NAMES[2], self.content_units),
            (Self::FIELD_NAMES[3], self.time),
            (Self::FIELD_NAMES[4], self.first_multiselect_size),
            (Self::FIELD_NAMES[5], self.second_multiselect_size),
            (Self::FIELD_NAMES[6], self.multiselect_product),
        ]
    }

    /// The limit called `name`, or `None` for an unknown name.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut DimensionRange> {
        match name {
            "multiselect_count" => Some(&mut self.multiselect_count),
            "content" => Some(&mut self.content),
            "content_units" => Some(&mut self.content_units),
            "time" => Some(&mut self.time),
            "first_multiselect_size" => Some(&mut self.first_multiselect_size),
            "second_multiselect_size" => Some(&mut self.second_multiselect_size),
            "multiselect_product" => Some(&mut self.multiselect_product),
            _ => None,
        }
    }
}

/// Limits for every chart type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LimitsTable {
    charts: IndexMap<VisualizationType, ChartTypeLimits>,
}

impl LimitsTable {
    /// A table where every chart type is unconstrained.
    #[must_use]
    pub fn unconstrained() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, chart: VisualizationType, limits: ChartTypeLimits) -> Self {
        self.insert(chart, limits);
        self
    }

    pub fn insert(&mut self, chart: VisualizationType, limits: ChartTypeLimits) {
        self.charts.insert(chart, limits);
    }

    /// Limits for `chart`; chart types missing from the table are unconstrained.
    #[must_use]
    pub fn get(&self, chart: VisualizationType) -> &ChartTypeLimits {
        self.charts
            .get(&chart)
            .unwrap_or(&ChartTypeLimits::UNCONSTRAINED)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VisualizationType, &ChartTypeLimits)> {
        self.charts.iter().map(|(chart, limits)| (*chart, limits))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
