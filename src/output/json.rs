use serde::Serialize;

use crate::checker::{
    ChartExplanation, Eligibility, RankedRejection, RejectionInfo, RejectionReason, SelectionReport,
};
use crate::error::Result;
use crate::limits::ChartTypeLimits;
use crate::visualization::VisualizationType;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    valid_types: Vec<VisualizationType>,
    results: Vec<ChartResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    compatible: usize,
    rejected: usize,
}

#[derive(Serialize)]
struct ChartResult<'a> {
    chart: VisualizationType,
    status: &'static str,
    #[serde(flatten)]
    rejection: Option<JsonRejection<'a>>,
}

#[derive(Serialize)]
struct JsonRejection<'a> {
    #[serde(flatten)]
    rejection: &'a RejectionInfo,
    message: String,
}

impl<'a> JsonRejection<'a> {
    fn new(rejection: &'a RejectionInfo) -> Self {
        Self {
            rejection,
            message: rejection.to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsonExplanation<'a> {
    chart: VisualizationType,
    status: &'static str,
    limits: &'a ChartTypeLimits,
    priority: &'a [RejectionReason],
    chain: Vec<JsonRankedRejection<'a>>,
}

#[derive(Serialize)]
struct JsonRankedRejection<'a> {
    #[serde(flatten)]
    ranked: &'a RankedRejection,
    message: String,
}

const fn status_str(compatible: bool) -> &'static str {
    if compatible { "compatible" } else { "rejected" }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &SelectionReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total: report.len(),
                compatible: report.compatible_count(),
                rejected: report.rejected_count(),
            },
            valid_types: report.valid_types().into_iter().collect(),
            results: report
                .iter()
                .map(|(chart, eligibility)| ChartResult {
                    chart,
                    status: status_str(eligibility.is_compatible()),
                    rejection: match eligibility {
                        Eligibility::Compatible => None,
                        Eligibility::Rejected { rejection } => Some(JsonRejection::new(rejection)),
                    },
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_explanation(&self, explanation: &ChartExplanation) -> Result<String> {
        let output = JsonExplanation {
            chart: explanation.chart,
            status: status_str(explanation.compatible),
            limits: &explanation.limits,
            priority: &explanation.priority,
            chain: explanation
                .chain
                .iter()
                .map(|ranked| JsonRankedRejection {
                    ranked,
                    message: ranked.rejection.to_string(),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
