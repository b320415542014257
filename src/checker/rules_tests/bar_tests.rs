//! Tests for the fixed rules of the bar chart family.

use super::*;

#[test]
fn horizontal_bar_rejects_ordinal_largest_multiselect() {
    let shape = selection(vec![
        dim("Tiedot", DimensionType::Content, 1),
        dim("Ika", DimensionType::Ordinal, 12),
    ]);
    let rejections = ChartRules::for_chart(VisualizationType::HorizontalBarChart)
        .evaluate(&shape, &ChartTypeLimits::UNCONSTRAINED);
    assert_eq!(rejections.len(), 1);
    assert_eq!(rejections[0].reason, R::ProgressiveNotAllowed);
    let subject = rejections[0].subject.as_ref().unwrap();
    assert_eq!((subject.index, subject.code.as_str()), (1, "Ika"));
}

#[test]
fn horizontal_bar_ignores_smaller_ordinal() {
    let shape = selection(vec![
        dim("Alue", DimensionType::Geographical, 20),
        dim("Ika", DimensionType::Ordinal, 3),
    ]);
    assert!(fixed(VisualizationType::HorizontalBarChart, &shape).is_empty());
}

#[test]
fn vertical_bar_requires_time_or_ordinal_axis() {
    let no_axis = selection(vec![
        dim("Tiedot", DimensionType::Content, 1),
        dim("Alue", DimensionType::Geographical, 5),
    ]);
    assert_eq!(
        fixed(VisualizationType::VerticalBarChart, &no_axis),
        vec![R::TimeOrProgressiveRequired]
    );

    let ordinal_axis = selection(vec![
        dim("Tiedot", DimensionType::Content, 1),
        dim("Ika", DimensionType::Ordinal, 5),
    ]);
    assert!(fixed(VisualizationType::VerticalBarChart, &ordinal_axis).is_empty());

    let time_axis = selection(vec![
        dim("Tiedot", DimensionType::Content, 1),
        dim("Vuosi", DimensionType::Time, 5),
    ]);
    assert!(fixed(VisualizationType::VerticalBarChart, &time_axis).is_empty());
}

#[test]
fn single_time_value_is_not_an_axis() {
    let shape = selection(vec![
        dim("Tiedot", DimensionType::Content, 1),
        dim("Vuosi", DimensionType::Time, 1),
        dim("Alue", DimensionType::Geographical, 5),
    ]);
    assert_eq!(
        fixed(VisualizationType::VerticalBarChart, &shape),
        vec![R::TimeOrProgressiveRequired]
    );
}

#[test]
fn group_horizontal_checks_only_the_two_largest() {
    let shape = selection(vec![
        dim("Alue", DimensionType::Geographical, 10),
        dim("Sukupuoli", DimensionType::Other, 3),
        dim("Ika", DimensionType::Ordinal, 2),
        dim("Tyyppi", DimensionType::Nominal, 2).with_combination_value("SSS"),
    ]);
    assert!(fixed(VisualizationType::GroupHorizontalBarChart, &shape).is_empty());

    let offending = selection(vec![
        dim("Alue", DimensionType::Geographical, 10),
        dim("Ika", DimensionType::Ordinal, 4).with_combination_value("SSS"),
    ]);
    assert_eq!(
        fixed(VisualizationType::GroupHorizontalBarChart, &offending),
        vec![R::ProgressiveNotAllowed, R::CombinationValuesNotAllowed]
    );
}

#[test]
fn group_vertical_rejects_combination_on_any_multiselect() {
    let shape = selection(vec![
        dim("Vuosi", DimensionType::Time, 10),
        dim("Alue", DimensionType::Geographical, 4),
        dim("Tyyppi", DimensionType::Nominal, 2).with_combination_value("SSS"),
    ]);
    let rejections = ChartRules::for_chart(VisualizationType::GroupVerticalBarChart)
        .evaluate(&shape, &ChartTypeLimits::UNCONSTRAINED);
    assert_eq!(rejections.len(), 1);
    assert_eq!(rejections[0].reason, R::CombinationValuesNotAllowed);
    assert_eq!(rejections[0].subject.as_ref().unwrap().code, "Tyyppi");
}

#[test]
fn combination_value_on_single_value_dimension_is_allowed() {
    let shape = selection(vec![
        dim("Vuosi", DimensionType::Time, 10),
        dim("Sukupuoli", DimensionType::Other, 1).with_combination_value("SSS"),
    ]);
    assert!(fixed(VisualizationType::GroupVerticalBarChart, &shape).is_empty());
    assert!(fixed(VisualizationType::StackedVerticalBarChart, &shape).is_empty());
}

#[test]
fn stacked_charts_reject_negative_data() {
    let shape = selection(vec![
        dim("Vuosi", DimensionType::Time, 10),
        dim("Alue", DimensionType::Geographical, 4),
    ])
    .with_negative_data();
    for chart in [
        VisualizationType::StackedHorizontalBarChart,
        VisualizationType::StackedVerticalBarChart,
        VisualizationType::PercentHorizontalBarChart,
        VisualizationType::PercentVerticalBarChart,
    ] {
        assert!(
            fixed(chart, &shape).contains(&R::NegativeDataNotAllowed),
            "{chart}"
        );
    }
}

#[test]
fn plain_bars_accept_negative_data() {
    let shape = selection(vec![
        dim("Vuosi", DimensionType::Time, 10),
        dim("Alue", DimensionType::Geographical, 4),
    ])
    .with_negative_data();
    for chart in [
        VisualizationType::HorizontalBarChart,
        VisualizationType::VerticalBarChart,
        VisualizationType::GroupHorizontalBarChart,
        VisualizationType::GroupVerticalBarChart,
    ] {
        assert!(fixed(chart, &shape).is_empty(), "{chart}");
    }
}

#[test]
fn vertical_bar_reports_missing_axis_before_multiselect_count() {
    let limits = ChartTypeLimits {
        multiselect_count: crate::limits::DimensionRange::exactly(1),
        ..ChartTypeLimits::default()
    };
    let shape = selection(vec![
        dim("Tiedot", DimensionType::Content, 1),
        dim("Vuosi", DimensionType::Time, 1),
        dim("Muu", DimensionType::Other, 1),
    ]);
    let rejection = best(VisualizationType::VerticalBarChart, &shape, &limits).unwrap();
    assert_eq!(rejection.reason, R::TimeOrProgressiveRequired);
}

#[test]
fn stacked_horizontal_reports_progressive_before_negative_data() {
    let shape = selection(vec![
        dim("Ika", DimensionType::Ordinal, 10),
        dim("Alue", DimensionType::Geographical, 4),
    ])
    .with_negative_data();
    let rejection = best(
        VisualizationType::StackedHorizontalBarChart,
        &shape,
        &ChartTypeLimits::UNCONSTRAINED,
    )
    .unwrap();
    assert_eq!(rejection.reason, R::ProgressiveNotAllowed);
}
