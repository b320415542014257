use std::collections::HashSet;

use crate::checker::priority::best_rejection;
use crate::limits::ChartTypeLimits;
use crate::selection::{DimensionInfo, DimensionType, VisualizationTypeSelectionObject};
use crate::visualization::VisualizationType;

use super::*;

mod bar_tests;

fn dim(code: &str, dimension_type: DimensionType, size: usize) -> DimensionInfo {
    DimensionInfo::new(code, dimension_type, size)
}

fn selection(dims: Vec<DimensionInfo>) -> VisualizationTypeSelectionObject {
    VisualizationTypeSelectionObject::new(dims)
}

/// Rejections from the chart's fixed rules alone.
fn fixed(chart: VisualizationType, selection: &VisualizationTypeSelectionObject) -> Vec<R> {
    ChartRules::for_chart(chart)
        .evaluate(selection, &ChartTypeLimits::UNCONSTRAINED)
        .iter()
        .map(|r| r.reason)
        .collect()
}

fn best(
    chart: VisualizationType,
    selection: &VisualizationTypeSelectionObject,
    limits: &ChartTypeLimits,
) -> Option<RejectionInfo> {
    let rules = ChartRules::for_chart(chart);
    let rejections = rules.evaluate(selection, limits);
    best_rejection(chart, rules.priority, &rejections).cloned()
}

#[test]
fn priority_lists_have_no_duplicates() {
    for chart in VisualizationType::ALL {
        let priority = ChartRules::for_chart(chart).priority;
        let unique: HashSet<_> = priority.iter().collect();
        assert_eq!(unique.len(), priority.len(), "duplicate reason for {chart}");
    }
}

#[test]
fn fixed_rule_reasons_are_listed_in_priority() {
    let emitted: &[(VisualizationType, R)] = &[
        (VisualizationType::HorizontalBarChart, R::ProgressiveNotAllowed),
        (VisualizationType::VerticalBarChart, R::TimeOrProgressiveRequired),
        (VisualizationType::GroupHorizontalBarChart, R::ProgressiveNotAllowed),
        (VisualizationType::GroupHorizontalBarChart, R::CombinationValuesNotAllowed),
        (VisualizationType::GroupVerticalBarChart, R::TimeOrProgressiveRequired),
        (VisualizationType::GroupVerticalBarChart, R::CombinationValuesNotAllowed),
        (VisualizationType::StackedHorizontalBarChart, R::ProgressiveNotAllowed),
        (VisualizationType::StackedHorizontalBarChart, R::NegativeDataNotAllowed),
        (VisualizationType::StackedVerticalBarChart, R::NegativeDataNotAllowed),
        (VisualizationType::PieChart, R::CombinationValuesNotAllowed),
        (VisualizationType::PieChart, R::NegativeDataNotAllowed),
        (VisualizationType::PyramidChart, R::ProgressiveRequired),
        (VisualizationType::PyramidChart, R::NegativeDataNotAllowed),
        (VisualizationType::LineChart, R::TimeOrProgressiveRequired),
        (VisualizationType::LineChart, R::IrregularTimeNotAllowed),
    ];
    for (chart, reason) in emitted {
        assert!(
            ChartRules::for_chart(*chart).priority.contains(reason),
            "{chart} does not rank {reason:?}"
        );
    }
}

#[test]
fn percent_charts_share_stacked_rules() {
    let pairs = [
        (
            VisualizationType::PercentHorizontalBarChart,
            VisualizationType::StackedHorizontalBarChart,
        ),
        (
            VisualizationType::PercentVerticalBarChart,
            VisualizationType::StackedVerticalBarChart,
        ),
    ];
    let shapes = [
        selection(vec![
            dim("Tiedot", DimensionType::Content, 1),
            dim("Alue", DimensionType::Geographical, 5),
            dim("Ika", DimensionType::Ordinal, 4),
        ])
        .with_negative_data(),
        selection(vec![
            dim("Tiedot", DimensionType::Content, 1),
            dim("Vuosi", DimensionType::Time, 8),
            dim("Sukupuoli", DimensionType::Other, 3).with_combination_value("SSS"),
        ]),
    ];

    for (percent, stacked) in pairs {
        let percent_rules = ChartRules::for_chart(percent);
        let stacked_rules = ChartRules::for_chart(stacked);
        assert_eq!(percent_rules.priority, stacked_rules.priority);
        assert_eq!(percent_rules.product_scope, stacked_rules.product_scope);
        for shape in &shapes {
            assert_eq!(fixed(percent, shape), fixed(stacked, shape));
        }
    }
}

#[test]
fn only_line_chart_excludes_the_axis_from_the_product() {
    for chart in VisualizationType::ALL {
        let expected = if chart == VisualizationType::LineChart {
            ProductScope::ExcludeAxis
        } else {
            ProductScope::AllMultiselects
        };
        assert_eq!(ChartRules::for_chart(chart).product_scope, expected);
    }
}

#[test]
fn charts_without_fixed_rules_accept_anything_unconstrained() {
    let shape = selection(vec![
        dim("Ika", DimensionType::Ordinal, 10),
        dim("Sukupuoli", DimensionType::Other, 3).with_combination_value("SSS"),
    ])
    .with_negative_data()
    .with_irregular_time();

    for chart in [
        VisualizationType::ScatterPlot,
        VisualizationType::Table,
        VisualizationType::KeyFigure,
    ] {
        assert!(fixed(chart, &shape).is_empty(), "{chart}");
    }
}

#[test]
fn key_figure_rejects_any_multiselect() {
    let limits = ChartTypeLimits {
        multiselect_count: crate::limits::DimensionRange::NotAllowed,
        ..ChartTypeLimits::default()
    };
    let single = selection(vec![
        dim("Tiedot", DimensionType::Content, 1),
        dim("Vuosi", DimensionType::Time, 1),
    ]);
    assert!(best(VisualizationType::KeyFigure, &single, &limits).is_none());

    let multi = selection(vec![
        dim("Tiedot", DimensionType::Content, 1),
        dim("Vuosi", DimensionType::Time, 2),
    ]);
    let rejection = best(VisualizationType::KeyFigure, &multi, &limits).unwrap();
    assert_eq!(rejection.reason, R::TooManyMultiselections);
    assert_eq!(rejection.params, vec![1, 0]);
}

#[test]
fn evaluate_puts_limit_checks_before_fixed_rules() {
    let limits = ChartTypeLimits {
        multiselect_count: crate::limits::DimensionRange::exactly(1),
        ..ChartTypeLimits::default()
    };
    let shape = selection(vec![
        dim("Alue", DimensionType::Geographical, 5),
        dim("Ika", DimensionType::Ordinal, 4),
    ])
    .with_negative_data();
    let reasons: Vec<_> = ChartRules::for_chart(VisualizationType::PieChart)
        .evaluate(&shape, &limits)
        .into_iter()
        .map(|r| r.reason)
        .collect();
    assert_eq!(
        reasons,
        vec![R::TooManyMultiselections, R::NegativeDataNotAllowed]
    );
}
