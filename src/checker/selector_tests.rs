use crate::checker::reason::RejectionReason;
use crate::limits::{ChartTypeLimits, DimensionRange};
use crate::selection::{DimensionInfo, DimensionType};

use super::*;

fn range(text: &str) -> DimensionRange {
    DimensionRange::parse(text).unwrap()
}

fn bar_limits() -> ChartTypeLimits {
    ChartTypeLimits {
        multiselect_count: range("1"),
        content: range("1"),
        time: range("0-30"),
        first_multiselect_size: range("2-30"),
        ..ChartTypeLimits::default()
    }
}

fn checker() -> VisualizationChecker {
    VisualizationChecker::new(
        LimitsTable::unconstrained()
            .with(VisualizationType::VerticalBarChart, bar_limits())
            .with(
                VisualizationType::KeyFigure,
                ChartTypeLimits {
                    multiselect_count: DimensionRange::NotAllowed,
                    ..ChartTypeLimits::default()
                },
            ),
    )
}

fn yearly_series() -> VisualizationTypeSelectionObject {
    VisualizationTypeSelectionObject::new(vec![
        DimensionInfo::new("Tiedot", DimensionType::Content, 1),
        DimensionInfo::new("Vuosi", DimensionType::Time, 10),
    ])
}

fn no_axis() -> VisualizationTypeSelectionObject {
    VisualizationTypeSelectionObject::new(vec![
        DimensionInfo::new("Tiedot", DimensionType::Content, 1),
        DimensionInfo::new("Vuosi", DimensionType::Time, 1),
        DimensionInfo::new("Muu", DimensionType::Other, 1),
    ])
}

#[test]
fn compatible_chart_has_no_rejection() {
    let checker = checker();
    assert!(checker.is_compatible(&yearly_series(), VisualizationType::VerticalBarChart));
    assert!(
        checker
            .rejection_info(&yearly_series(), VisualizationType::VerticalBarChart)
            .is_none()
    );
}

#[test]
fn rejection_info_picks_highest_priority() {
    let checker = checker();
    let selection = no_axis();
    let all = checker.rejections(&selection, VisualizationType::VerticalBarChart);
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].reason, RejectionReason::NotEnoughMultiselections);

    let best = checker
        .rejection_info(&selection, VisualizationType::VerticalBarChart)
        .unwrap();
    assert_eq!(best.reason, RejectionReason::TimeOrProgressiveRequired);
}

#[test]
fn valid_types_agree_with_rejection_info() {
    let checker = checker();
    for selection in [yearly_series(), no_axis()] {
        let valid = checker.valid_visualization_types(&selection);
        for chart in VisualizationType::ALL {
            assert_eq!(
                valid.contains(&chart),
                checker.rejection_info(&selection, chart).is_none(),
                "{chart}"
            );
        }
    }
}

#[test]
fn valid_types_follow_declaration_order() {
    let valid = checker().valid_visualization_types(&yearly_series());
    let expected: Vec<_> = VisualizationType::ALL
        .into_iter()
        .filter(|chart| valid.contains(chart))
        .collect();
    assert_eq!(valid.into_iter().collect::<Vec<_>>(), expected);
}

#[test]
fn key_figure_only_for_single_values() {
    let checker = checker();
    assert!(!checker.is_compatible(&yearly_series(), VisualizationType::KeyFigure));
    assert!(checker.is_compatible(&no_axis(), VisualizationType::KeyFigure));
}

#[test]
fn check_reports_every_chart_type() {
    let report = checker().check(&no_axis());
    assert_eq!(report.len(), VisualizationType::ALL.len());
    assert_eq!(
        report.compatible_count() + report.rejected_count(),
        report.len()
    );
    assert_eq!(
        report
            .rejection(VisualizationType::VerticalBarChart)
            .map(|r| r.reason),
        Some(RejectionReason::TimeOrProgressiveRequired)
    );
    assert!(report.is_compatible(VisualizationType::KeyFigure));
}

#[test]
fn check_matches_valid_types() {
    let checker = checker();
    let selection = yearly_series();
    assert_eq!(
        checker.check(&selection).valid_types(),
        checker.valid_visualization_types(&selection)
    );
}

#[test]
fn evaluation_is_deterministic() {
    let checker = checker();
    let selection = no_axis();
    assert_eq!(checker.check(&selection), checker.check(&selection));
}

#[test]
fn explain_marks_first_rejection_selected() {
    let explanation = checker().explain(&no_axis(), VisualizationType::VerticalBarChart);
    assert!(!explanation.compatible);
    assert_eq!(explanation.chain.len(), 2);
    assert_eq!(explanation.chain[0].status, RankStatus::Selected);
    assert_eq!(explanation.chain[0].rank, Some(0));
    assert_eq!(explanation.chain[1].status, RankStatus::Superseded);
    assert_eq!(
        explanation.chain[1].rejection.reason,
        RejectionReason::NotEnoughMultiselections
    );
    assert_eq!(
        explanation.selected().map(|r| r.reason),
        Some(RejectionReason::TimeOrProgressiveRequired)
    );
    assert_eq!(explanation.limits, bar_limits());
}

#[test]
fn explain_compatible_chart_has_empty_chain() {
    let explanation = checker().explain(&yearly_series(), VisualizationType::VerticalBarChart);
    assert!(explanation.compatible);
    assert!(explanation.chain.is_empty());
    assert!(explanation.selected().is_none());
    assert_eq!(explanation.priority[0], RejectionReason::TimeOrProgressiveRequired);
}

#[test]
fn checker_is_shareable_across_threads() {
    let checker = std::sync::Arc::new(checker());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let checker = std::sync::Arc::clone(&checker);
            std::thread::spawn(move || checker.valid_visualization_types(&yearly_series()))
        })
        .collect();
    let expected = checker.valid_visualization_types(&yearly_series());
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
