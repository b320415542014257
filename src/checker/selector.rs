use indexmap::IndexSet;
use tracing::debug;

use crate::limits::LimitsTable;
use crate::selection::VisualizationTypeSelectionObject;
use crate::visualization::VisualizationType;

use super::Checker;
use super::explain::{ChartExplanation, RankStatus, RankedRejection};
use super::priority::{best_rejection, rank_of, rank_rejections};
use super::reason::RejectionInfo;
use super::result::{Eligibility, SelectionReport};
use super::rules::ChartRules;

/// Evaluates selections against the rules of every chart type.
///
/// Holds only the immutable limits table, so one checker can serve any number
/// of concurrent evaluations.
#[derive(Debug, Clone)]
pub struct VisualizationChecker {
    limits: LimitsTable,
}

impl VisualizationChecker {
    #[must_use]
    pub const fn new(limits: LimitsTable) -> Self {
        Self { limits }
    }

    #[must_use]
    pub const fn limits(&self) -> &LimitsTable {
        &self.limits
    }

    /// Every rejection `chart` produces for `selection`, in emission order.
    #[must_use]
    pub fn rejections(
        &self,
        selection: &VisualizationTypeSelectionObject,
        chart: VisualizationType,
    ) -> Vec<RejectionInfo> {
        let rejections = ChartRules::for_chart(chart).evaluate(selection, self.limits.get(chart));
        debug!(
            chart = chart.as_str(),
            rejections = rejections.len(),
            "evaluated chart type"
        );
        rejections
    }

    /// The representative reason `chart` cannot display `selection`, or `None`
    /// when it can.
    #[must_use]
    pub fn rejection_info(
        &self,
        selection: &VisualizationTypeSelectionObject,
        chart: VisualizationType,
    ) -> Option<RejectionInfo> {
        let rules = ChartRules::for_chart(chart);
        let rejections = rules.evaluate(selection, self.limits.get(chart));
        best_rejection(chart, rules.priority, &rejections).cloned()
    }

    #[must_use]
    pub fn is_compatible(
        &self,
        selection: &VisualizationTypeSelectionObject,
        chart: VisualizationType,
    ) -> bool {
        self.rejections(selection, chart).is_empty()
    }

    /// Chart types that can display `selection`, in evaluation order.
    #[must_use]
    pub fn valid_visualization_types(
        &self,
        selection: &VisualizationTypeSelectionObject,
    ) -> IndexSet<VisualizationType> {
        VisualizationType::ALL
            .into_iter()
            .filter(|chart| self.is_compatible(selection, *chart))
            .collect()
    }

    /// Every rejection of `chart` with its rank and whether it was selected.
    #[must_use]
    pub fn explain(
        &self,
        selection: &VisualizationTypeSelectionObject,
        chart: VisualizationType,
    ) -> ChartExplanation {
        let rules = ChartRules::for_chart(chart);
        let limits = *self.limits.get(chart);
        let rejections = rules.evaluate(selection, &limits);

        let chain = rank_rejections(chart, rules.priority, &rejections)
            .into_iter()
            .enumerate()
            .map(|(position, (_, rejection))| RankedRejection {
                rejection: rejection.clone(),
                rank: rank_of(rules.priority, rejection.reason),
                status: if position == 0 {
                    RankStatus::Selected
                } else {
                    RankStatus::Superseded
                },
            })
            .collect();

        ChartExplanation {
            chart,
            compatible: rejections.is_empty(),
            limits,
            priority: rules.priority.to_vec(),
            chain,
        }
    }
}

impl Checker for VisualizationChecker {
    fn check(&self, selection: &VisualizationTypeSelectionObject) -> SelectionReport {
        let mut report = SelectionReport::default();
        for chart in VisualizationType::ALL {
            let eligibility = self
                .rejection_info(selection, chart)
                .map_or(Eligibility::Compatible, |rejection| Eligibility::Rejected {
                    rejection,
                });
            report.insert(chart, eligibility);
        }
        debug!(
            compatible = report.compatible_count(),
            rejected = report.rejected_count(),
            "checked selection"
        );
        report
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
