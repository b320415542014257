//! Per chart type rules.
//!
//! Every chart type is described by a [`ChartRules`] value: a function adding
//! the fixed structural rules of that chart, the order in which rejection
//! reasons are reported, and how the multiselect product is computed. The
//! percent bar charts reuse the rules of their stacked counterparts.

use crate::limits::ChartTypeLimits;
use crate::selection::{SelectedDimension, VisualizationTypeSelectionObject};
use crate::visualization::VisualizationType;

use super::generic::{self, ProductScope};
use super::reason::{RejectionInfo, RejectionReason as R};

type FixedRules = fn(&VisualizationTypeSelectionObject) -> Vec<RejectionInfo>;

/// Rule set of a single chart type.
#[derive(Debug, Clone, Copy)]
pub struct ChartRules {
    pub chart: VisualizationType,
    /// Rejection reasons, most important first.
    pub priority: &'static [R],
    pub product_scope: ProductScope,
    fixed_rules: FixedRules,
}

impl ChartRules {
    #[must_use]
    pub fn for_chart(chart: VisualizationType) -> Self {
        let (priority, product_scope, fixed_rules): (&'static [R], ProductScope, FixedRules) =
            match chart {
                VisualizationType::HorizontalBarChart => (
                    HORIZONTAL_BAR_PRIORITY,
                    ProductScope::AllMultiselects,
                    horizontal_bar_rules,
                ),
                VisualizationType::VerticalBarChart => (
                    VERTICAL_BAR_PRIORITY,
                    ProductScope::AllMultiselects,
                    vertical_bar_rules,
                ),
                VisualizationType::GroupHorizontalBarChart => (
                    GROUP_HORIZONTAL_BAR_PRIORITY,
                    ProductScope::AllMultiselects,
                    group_horizontal_bar_rules,
                ),
                VisualizationType::GroupVerticalBarChart => (
                    GROUP_VERTICAL_BAR_PRIORITY,
                    ProductScope::AllMultiselects,
                    group_vertical_bar_rules,
                ),
                VisualizationType::StackedHorizontalBarChart
                | VisualizationType::PercentHorizontalBarChart => (
                    STACKED_HORIZONTAL_BAR_PRIORITY,
                    ProductScope::AllMultiselects,
                    stacked_horizontal_bar_rules,
                ),
                VisualizationType::StackedVerticalBarChart
                | VisualizationType::PercentVerticalBarChart => (
                    STACKED_VERTICAL_BAR_PRIORITY,
                    ProductScope::AllMultiselects,
                    stacked_vertical_bar_rules,
                ),
                VisualizationType::PieChart => {
                    (PIE_PRIORITY, ProductScope::AllMultiselects, pie_rules)
                }
                VisualizationType::PyramidChart => {
                    (PYRAMID_PRIORITY, ProductScope::AllMultiselects, pyramid_rules)
                }
                VisualizationType::LineChart => {
                    (LINE_PRIORITY, ProductScope::ExcludeAxis, line_rules)
                }
                VisualizationType::ScatterPlot => (
                    SCATTER_PLOT_PRIORITY,
                    ProductScope::AllMultiselects,
                    no_fixed_rules,
                ),
                VisualizationType::Table => {
                    (TABLE_PRIORITY, ProductScope::AllMultiselects, no_fixed_rules)
                }
                VisualizationType::KeyFigure => (
                    KEY_FIGURE_PRIORITY,
                    ProductScope::AllMultiselects,
                    no_fixed_rules,
                ),
            };
        Self {
            chart,
            priority,
            product_scope,
            fixed_rules,
        }
    }

    /// Every rejection for `selection`: shared limit checks first, then the
    /// chart's fixed rules.
    #[must_use]
    pub fn evaluate(
        &self,
        selection: &VisualizationTypeSelectionObject,
        limits: &ChartTypeLimits,
    ) -> Vec<RejectionInfo> {
        let mut rejections = generic::check_limits(selection, limits, self.product_scope);
        rejections.extend((self.fixed_rules)(selection));
        rejections
    }
}

// ============================================================================
// Fixed rules
// ============================================================================

fn no_fixed_rules(_: &VisualizationTypeSelectionObject) -> Vec<RejectionInfo> {
    Vec::new()
}

fn horizontal_bar_rules(selection: &VisualizationTypeSelectionObject) -> Vec<RejectionInfo> {
    forbid_ordinal(selection.largest_multiselect())
}

fn vertical_bar_rules(selection: &VisualizationTypeSelectionObject) -> Vec<RejectionInfo> {
    require_axis(selection)
}

fn group_horizontal_bar_rules(selection: &VisualizationTypeSelectionObject) -> Vec<RejectionInfo> {
    let largest_two = largest_two(selection);
    let mut rejections = forbid_ordinal(largest_two.clone());
    rejections.extend(forbid_combination_values(largest_two));
    rejections
}

fn group_vertical_bar_rules(selection: &VisualizationTypeSelectionObject) -> Vec<RejectionInfo> {
    let mut rejections = require_axis(selection);
    rejections.extend(forbid_combination_values(selection.multiselects()));
    rejections
}

fn stacked_horizontal_bar_rules(
    selection: &VisualizationTypeSelectionObject,
) -> Vec<RejectionInfo> {
    let mut rejections = forbid_ordinal(largest_two(selection));
    rejections.extend(forbid_combination_values(selection.multiselects()));
    rejections.extend(forbid_negative_data(selection));
    rejections
}

fn stacked_vertical_bar_rules(selection: &VisualizationTypeSelectionObject) -> Vec<RejectionInfo> {
    let mut rejections = require_axis(selection);
    rejections.extend(forbid_combination_values(selection.multiselects()));
    rejections.extend(forbid_negative_data(selection));
    rejections
}

fn pie_rules(selection: &VisualizationTypeSelectionObject) -> Vec<RejectionInfo> {
    let mut rejections = forbid_combination_values(selection.largest_multiselect());
    rejections.extend(forbid_negative_data(selection));
    rejections
}

fn pyramid_rules(selection: &VisualizationTypeSelectionObject) -> Vec<RejectionInfo> {
    let mut rejections = Vec::new();
    if !largest_two(selection).iter().any(|dim| dim.info.is_ordinal()) {
        rejections.push(RejectionInfo::new(R::ProgressiveRequired));
    }
    rejections.extend(forbid_combination_values(selection.multiselects()));
    rejections.extend(forbid_negative_data(selection));
    rejections
}

fn line_rules(selection: &VisualizationTypeSelectionObject) -> Vec<RejectionInfo> {
    let Some(axis) = selection.time_or_largest_ordinal() else {
        return vec![RejectionInfo::new(R::TimeOrProgressiveRequired)];
    };
    let axis_is_time = selection
        .time_dimension()
        .is_some_and(|time| time.index == axis.index);
    if axis_is_time && selection.time_is_irregular {
        return vec![RejectionInfo::new(R::IrregularTimeNotAllowed).with_subject(axis.to_ref())];
    }
    Vec::new()
}

// ============================================================================
// Rule building blocks
// ============================================================================

fn largest_two(selection: &VisualizationTypeSelectionObject) -> Vec<SelectedDimension<'_>> {
    selection.multiselects_by_size().into_iter().take(2).collect()
}

fn require_axis(selection: &VisualizationTypeSelectionObject) -> Vec<RejectionInfo> {
    if selection.time_or_largest_ordinal().is_some() {
        Vec::new()
    } else {
        vec![RejectionInfo::new(R::TimeOrProgressiveRequired)]
    }
}

fn forbid_ordinal<'a>(dims: impl IntoIterator<Item = SelectedDimension<'a>>) -> Vec<RejectionInfo> {
    dims.into_iter()
        .filter(|dim| dim.info.is_ordinal())
        .map(|dim| RejectionInfo::new(R::ProgressiveNotAllowed).with_subject(dim.to_ref()))
        .collect()
}

fn forbid_combination_values<'a>(
    dims: impl IntoIterator<Item = SelectedDimension<'a>>,
) -> Vec<RejectionInfo> {
    dims.into_iter()
        .filter(|dim| dim.info.has_combination_value())
        .map(|dim| RejectionInfo::new(R::CombinationValuesNotAllowed).with_subject(dim.to_ref()))
        .collect()
}

fn forbid_negative_data(selection: &VisualizationTypeSelectionObject) -> Option<RejectionInfo> {
    selection
        .has_negative_data
        .then(|| RejectionInfo::new(R::NegativeDataNotAllowed))
}

// ============================================================================
// Priorities
// ============================================================================

const HORIZONTAL_BAR_PRIORITY: &[R] = &[
    R::NotEnoughMultiselections,
    R::TooManyMultiselections,
    R::ContentRequired,
    R::ContentNotAllowed,
    R::ContentBelowMin,
    R::ContentOverMax,
    R::UnambiguousContentUnitRequired,
    R::ContentUnitsBelowMin,
    R::ContentUnitsOverMax,
    R::TimeRequired,
    R::TimeNotAllowed,
    R::TimeBelowMin,
    R::TimeOverMax,
    R::ProgressiveNotAllowed,
    R::FirstMultiselectBelowMin,
    R::FirstMultiselectOverMax,
    R::SecondMultiselectBelowMin,
    R::SecondMultiselectOverMax,
    R::MultiselectProductBelowMin,
    R::MultiselectProductOverMax,
];

const VERTICAL_BAR_PRIORITY: &[R] = &[
    R::TimeOrProgressiveRequired,
    R::NotEnoughMultiselections,
    R::TooManyMultiselections,
    R::ContentRequired,
    R::ContentNotAllowed,
    R::ContentBelowMin,
    R::ContentOverMax,
    R::UnambiguousContentUnitRequired,
    R::ContentUnitsBelowMin,
    R::ContentUnitsOverMax,
    R::TimeRequired,
    R::TimeNotAllowed,
    R::TimeBelowMin,
    R::TimeOverMax,
    R::FirstMultiselectBelowMin,
    R::FirstMultiselectOverMax,
    R::SecondMultiselectBelowMin,
    R::SecondMultiselectOverMax,
    R::MultiselectProductBelowMin,
    R::MultiselectProductOverMax,
];

const GROUP_HORIZONTAL_BAR_PRIORITY: &[R] = &[
    R::NotEnoughMultiselections,
    R::TooManyMultiselections,
    R::ContentRequired,
    R::ContentNotAllowed,
    R::ContentBelowMin,
    R::ContentOverMax,
    R::UnambiguousContentUnitRequired,
    R::ContentUnitsBelowMin,
    R::ContentUnitsOverMax,
    R::TimeRequired,
    R::TimeNotAllowed,
    R::TimeBelowMin,
    R::TimeOverMax,
    R::ProgressiveNotAllowed,
    R::CombinationValuesNotAllowed,
    R::FirstMultiselectBelowMin,
    R::FirstMultiselectOverMax,
    R::SecondMultiselectBelowMin,
    R::SecondMultiselectOverMax,
    R::MultiselectProductBelowMin,
    R::MultiselectProductOverMax,
];

const GROUP_VERTICAL_BAR_PRIORITY: &[R] = &[
    R::TimeOrProgressiveRequired,
    R::NotEnoughMultiselections,
    R::TooManyMultiselections,
    R::ContentRequired,
    R::ContentNotAllowed,
    R::ContentBelowMin,
    R::ContentOverMax,
    R::UnambiguousContentUnitRequired,
    R::ContentUnitsBelowMin,
    R::ContentUnitsOverMax,
    R::TimeRequired,
    R::TimeNotAllowed,
    R::TimeBelowMin,
    R::TimeOverMax,
    R::CombinationValuesNotAllowed,
    R::FirstMultiselectBelowMin,
    R::FirstMultiselectOverMax,
    R::SecondMultiselectBelowMin,
    R::SecondMultiselectOverMax,
    R::MultiselectProductBelowMin,
    R::MultiselectProductOverMax,
];

const STACKED_HORIZONTAL_BAR_PRIORITY: &[R] = &[
    R::NotEnoughMultiselections,
    R::TooManyMultiselections,
    R::ContentRequired,
    R::ContentNotAllowed,
    R::ContentBelowMin,
    R::ContentOverMax,
    R::UnambiguousContentUnitRequired,
    R::ContentUnitsBelowMin,
    R::ContentUnitsOverMax,
    R::TimeRequired,
    R::TimeNotAllowed,
    R::TimeBelowMin,
    R::TimeOverMax,
    R::ProgressiveNotAllowed,
    R::NegativeDataNotAllowed,
    R::CombinationValuesNotAllowed,
    R::FirstMultiselectBelowMin,
    R::FirstMultiselectOverMax,
    R::SecondMultiselectBelowMin,
    R::SecondMultiselectOverMax,
    R::MultiselectProductBelowMin,
    R::MultiselectProductOverMax,
];

const STACKED_VERTICAL_BAR_PRIORITY: &[R] = &[
    R::TimeOrProgressiveRequired,
    R::NotEnoughMultiselections,
    R::TooManyMultiselections,
    R::ContentRequired,
    R::ContentNotAllowed,
    R::ContentBelowMin,
    R::ContentOverMax,
    R::UnambiguousContentUnitRequired,
    R::ContentUnitsBelowMin,
    R::ContentUnitsOverMax,
    R::TimeRequired,
    R::TimeNotAllowed,
    R::TimeBelowMin,
    R::TimeOverMax,
    R::NegativeDataNotAllowed,
    R::CombinationValuesNotAllowed,
    R::FirstMultiselectBelowMin,
    R::FirstMultiselectOverMax,
    R::SecondMultiselectBelowMin,
    R::SecondMultiselectOverMax,
    R::MultiselectProductBelowMin,
    R::MultiselectProductOverMax,
];

const PIE_PRIORITY: &[R] = &[
    R::NotEnoughMultiselections,
    R::TooManyMultiselections,
    R::ContentRequired,
    R::ContentNotAllowed,
    R::ContentBelowMin,
    R::ContentOverMax,
    R::UnambiguousContentUnitRequired,
    R::ContentUnitsBelowMin,
    R::ContentUnitsOverMax,
    R::TimeRequired,
    R::TimeNotAllowed,
    R::TimeBelowMin,
    R::TimeOverMax,
    R::NegativeDataNotAllowed,
    R::CombinationValuesNotAllowed,
    R::FirstMultiselectBelowMin,
    R::FirstMultiselectOverMax,
    R::MultiselectProductBelowMin,
    R::MultiselectProductOverMax,
];

const PYRAMID_PRIORITY: &[R] = &[
    R::NotEnoughMultiselections,
    R::TooManyMultiselections,
    R::FirstMultiselectBelowMin,
    R::ContentRequired,
    R::ContentNotAllowed,
    R::ContentBelowMin,
    R::ContentOverMax,
    R::UnambiguousContentUnitRequired,
    R::ContentUnitsBelowMin,
    R::ContentUnitsOverMax,
    R::TimeRequired,
    R::TimeNotAllowed,
    R::TimeBelowMin,
    R::TimeOverMax,
    R::ProgressiveRequired,
    R::NegativeDataNotAllowed,
    R::CombinationValuesNotAllowed,
    R::FirstMultiselectOverMax,
    R::SecondMultiselectBelowMin,
    R::SecondMultiselectOverMax,
    R::MultiselectProductBelowMin,
    R::MultiselectProductOverMax,
];

const LINE_PRIORITY: &[R] = &[
    R::TimeOrProgressiveRequired,
    R::MultiselectProductOverMax,
    R::IrregularTimeNotAllowed,
    R::NotEnoughMultiselections,
    R::TooManyMultiselections,
    R::ContentRequired,
    R::ContentNotAllowed,
    R::ContentBelowMin,
    R::ContentOverMax,
    R::UnambiguousContentUnitRequired,
    R::ContentUnitsBelowMin,
    R::ContentUnitsOverMax,
    R::TimeRequired,
    R::TimeNotAllowed,
    R::TimeBelowMin,
    R::TimeOverMax,
    R::FirstMultiselectBelowMin,
    R::FirstMultiselectOverMax,
    R::SecondMultiselectBelowMin,
    R::SecondMultiselectOverMax,
    R::MultiselectProductBelowMin,
];

const SCATTER_PLOT_PRIORITY: &[R] = &[
    R::ContentRequired,
    R::ContentNotAllowed,
    R::ContentBelowMin,
    R::ContentOverMax,
    R::NotEnoughMultiselections,
    R::TooManyMultiselections,
    R::UnambiguousContentUnitRequired,
    R::ContentUnitsBelowMin,
    R::ContentUnitsOverMax,
    R::TimeRequired,
    R::TimeNotAllowed,
    R::TimeBelowMin,
    R::TimeOverMax,
    R::FirstMultiselectBelowMin,
    R::FirstMultiselectOverMax,
    R::SecondMultiselectBelowMin,
    R::SecondMultiselectOverMax,
    R::MultiselectProductBelowMin,
    R::MultiselectProductOverMax,
];

const TABLE_PRIORITY: &[R] = &[
    R::MultiselectProductOverMax,
    R::MultiselectProductBelowMin,
    R::FirstMultiselectOverMax,
    R::FirstMultiselectBelowMin,
    R::SecondMultiselectOverMax,
    R::SecondMultiselectBelowMin,
    R::NotEnoughMultiselections,
    R::TooManyMultiselections,
    R::ContentRequired,
    R::ContentNotAllowed,
    R::ContentBelowMin,
    R::ContentOverMax,
    R::UnambiguousContentUnitRequired,
    R::ContentUnitsBelowMin,
    R::ContentUnitsOverMax,
    R::TimeRequired,
    R::TimeNotAllowed,
    R::TimeBelowMin,
    R::TimeOverMax,
];

const KEY_FIGURE_PRIORITY: &[R] = &[R::TooManyMultiselections];

#[cfg(test)]
#[path = "rules_tests/mod.rs"]
mod tests;
