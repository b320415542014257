use serde::Serialize;

use crate::limits::ChartTypeLimits;
use crate::visualization::VisualizationType;

use super::reason::{RejectionInfo, RejectionReason};

/// Status of a rejection in the ranked chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankStatus {
    /// Reported as the reason the chart type is rejected
    Selected,
    /// Also violated, but outranked by the selected rejection
    Superseded,
}

/// A rejection with its position in the chart's priority list.
#[derive(Debug, Clone, Serialize)]
pub struct RankedRejection {
    #[serde(flatten)]
    pub rejection: RejectionInfo,
    /// Index in the priority list; `None` when the list does not mention the reason.
    pub rank: Option<usize>,
    pub status: RankStatus,
}

/// Full account of how one chart type was evaluated.
#[derive(Debug, Clone)]
pub struct ChartExplanation {
    pub chart: VisualizationType,
    pub compatible: bool,
    /// Limits the shared checks ran against.
    pub limits: ChartTypeLimits,
    /// The chart's priority list, most important first.
    pub priority: Vec<RejectionReason>,
    /// Every rejection, most important first.
    pub chain: Vec<RankedRejection>,
}

impl ChartExplanation {
    #[must_use]
    pub fn selected(&self) -> Option<&RejectionInfo> {
        self.chain
            .iter()
            .find(|ranked| ranked.status == RankStatus::Selected)
            .map(|ranked| &ranked.rejection)
    }
}
