use crate::checker::VisualizationChecker;
use crate::limits::{DimensionRange, LimitsTable};
use crate::selection::{DimensionInfo, DimensionRef, DimensionType, VisualizationTypeSelectionObject};

use super::*;

fn sample_report() -> SelectionReport {
    let mut report = SelectionReport::default();
    report.insert(VisualizationType::LineChart, Eligibility::Compatible);
    report.insert(
        VisualizationType::GroupVerticalBarChart,
        Eligibility::Rejected {
            rejection: RejectionInfo::out_of_range(
                RejectionReason::SecondMultiselectOverMax,
                Some(DimensionRef {
                    index: 2,
                    code: "Alue".to_string(),
                }),
                9,
                6,
            ),
        },
    );
    report
}

#[test]
fn report_has_summary_and_results() {
    let output = JsonFormatter.format(&sample_report()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["summary"]["total"], 2);
    assert_eq!(json["summary"]["compatible"], 1);
    assert_eq!(json["summary"]["rejected"], 1);
    assert_eq!(json["valid_types"], serde_json::json!(["line_chart"]));

    let results = json["results"].as_array().unwrap();
    assert_eq!(results[0], serde_json::json!({"chart": "line_chart", "status": "compatible"}));
    assert_eq!(results[1]["chart"], "group_vertical_bar_chart");
    assert_eq!(results[1]["status"], "rejected");
    assert_eq!(results[1]["reason"], "second_multiselect_over_max");
    assert_eq!(results[1]["subject"], serde_json::json!({"index": 2, "code": "Alue"}));
    assert_eq!(results[1]["params"], serde_json::json!([9, 6]));
    assert_eq!(
        results[1]["message"],
        "dimension 'Alue' can have at most 6 selected values, found 9"
    );
}

#[test]
fn rejection_without_subject_or_params_omits_them() {
    let mut report = SelectionReport::default();
    report.insert(
        VisualizationType::PieChart,
        Eligibility::Rejected {
            rejection: RejectionInfo::new(RejectionReason::NegativeDataNotAllowed),
        },
    );
    let output = JsonFormatter.format(&report).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    let result = &json["results"][0];
    assert!(result.get("subject").is_none());
    assert!(result.get("params").is_none());
    assert_eq!(result["message"], "the data contains negative values");
}

#[test]
fn explanation_includes_ranks_and_limits() {
    let limits = LimitsTable::unconstrained().with(
        VisualizationType::PieChart,
        crate::limits::ChartTypeLimits {
            first_multiselect_size: DimensionRange::between(2, 10).unwrap(),
            ..crate::limits::ChartTypeLimits::default()
        },
    );
    let selection = VisualizationTypeSelectionObject::new(vec![
        DimensionInfo::new("Alue", DimensionType::Geographical, 12).with_combination_value("SSS"),
    ])
    .with_negative_data();
    let explanation =
        VisualizationChecker::new(limits).explain(&selection, VisualizationType::PieChart);

    let output = JsonFormatter.format_explanation(&explanation).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["chart"], "pie_chart");
    assert_eq!(json["status"], "rejected");
    assert_eq!(json["limits"]["first_multiselect_size"], "2-10");
    assert_eq!(json["priority"][0], "not_enough_multiselections");

    let chain = json["chain"].as_array().unwrap();
    let reasons: Vec<_> = chain.iter().map(|r| r["reason"].as_str().unwrap()).collect();
    assert_eq!(
        reasons,
        vec![
            "negative_data_not_allowed",
            "combination_values_not_allowed",
            "first_multiselect_over_max"
        ]
    );
    assert_eq!(chain[0]["status"], "selected");
    assert_eq!(chain[1]["status"], "superseded");
    assert!(chain[0]["rank"].is_u64());
    assert_eq!(chain[2]["params"], serde_json::json!([12, 10]));
    assert_eq!(chain[0]["message"], "the data contains negative values");
    assert!(chain[0].get("subject").is_none());
}
