//! Choosing the representative rejection.
//!
//! A chart type can fail several rules at once. Each rejection is ranked by the
//! position of its reason in the chart's priority list; the lowest rank wins and
//! equal ranks keep emission order. Reasons missing from the list rank after
//! every listed reason.

use tracing::warn;

use crate::visualization::VisualizationType;

use super::reason::{RejectionInfo, RejectionReason};

/// Rank of `reason` in `priority`, or `None` when the list does not mention it.
#[must_use]
pub fn rank_of(priority: &[RejectionReason], reason: RejectionReason) -> Option<usize> {
    priority.iter().position(|listed| *listed == reason)
}

/// Sort key used for resolution: unlisted reasons get `priority.len()`.
fn effective_rank(
    chart: VisualizationType,
    priority: &[RejectionReason],
    reason: RejectionReason,
) -> usize {
    rank_of(priority, reason).unwrap_or_else(|| {
        warn!(
            chart = chart.as_str(),
            reason = reason.code(),
            "rejection reason missing from priority list, ranking it last"
        );
        priority.len()
    })
}

/// Rejections ordered from most to least important, each with its effective rank.
#[must_use]
pub fn rank_rejections<'a>(
    chart: VisualizationType,
    priority: &[RejectionReason],
    rejections: &'a [RejectionInfo],
) -> Vec<(usize, &'a RejectionInfo)> {
    let mut ranked: Vec<_> = rejections
        .iter()
        .map(|rejection| (effective_rank(chart, priority, rejection.reason), rejection))
        .collect();
    ranked.sort_by_key(|(rank, _)| *rank);
    ranked
}

/// The single most informative rejection, or `None` when there are none.
#[must_use]
pub fn best_rejection<'a>(
    chart: VisualizationType,
    priority: &[RejectionReason],
    rejections: &'a [RejectionInfo],
) -> Option<&'a RejectionInfo> {
    rank_rejections(chart, priority, rejections)
        .into_iter()
        .next()
        .map(|(_, rejection)| rejection)
}

#[cfg(test)]
#[path = "priority_tests.rs"]
mod tests;
