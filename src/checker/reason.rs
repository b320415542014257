use std::fmt;

use serde::Serialize;

use crate::selection::DimensionRef;

/// Why a chart type cannot display a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    // Multiselect count
    NotEnoughMultiselections,
    TooManyMultiselections,

    // Content
    ContentRequired,
    ContentNotAllowed,
    ContentBelowMin,
    ContentOverMax,
    UnambiguousContentUnitRequired,
    ContentUnitsBelowMin,
    ContentUnitsOverMax,

    // Time
    TimeRequired,
    TimeNotAllowed,
    TimeBelowMin,
    TimeOverMax,
    TimeOrProgressiveRequired,
    IrregularTimeNotAllowed,

    // Axis dimension
    ProgressiveRequired,
    ProgressiveNotAllowed,

    // Structural
    CombinationValuesNotAllowed,
    NegativeDataNotAllowed,

    // Multiselect sizes
    FirstMultiselectBelowMin,
    FirstMultiselectOverMax,
    SecondMultiselectBelowMin,
    SecondMultiselectOverMax,
    MultiselectProductBelowMin,
    MultiselectProductOverMax,
}

impl RejectionReason {
    pub const ALL: [Self; 25] = [
        Self::NotEnoughMultiselections,
        Self::TooManyMultiselections,
        Self::ContentRequired,
        Self::ContentNotAllowed,
        Self::ContentBelowMin,
        Self::ContentOverMax,
        Self::UnambiguousContentUnitRequired,
        Self::ContentUnitsBelowMin,
        Self::ContentUnitsOverMax,
        Self::TimeRequired,
        Self::TimeNotAllowed,
        Self::TimeBelowMin,
        Self::TimeOverMax,
        Self::TimeOrProgressiveRequired,
        Self::IrregularTimeNotAllowed,
        Self::ProgressiveRequired,
        Self::ProgressiveNotAllowed,
        Self::CombinationValuesNotAllowed,
        Self::NegativeDataNotAllowed,
        Self::FirstMultiselectBelowMin,
        Self::FirstMultiselectOverMax,
        Self::SecondMultiselectBelowMin,
        Self::SecondMultiselectOverMax,
        Self::MultiselectProductBelowMin,
        Self::MultiselectProductOverMax,
    ];

    /// Stable wire code, used as the localization key by presentation layers.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NotEnoughMultiselections => "not_enough_multiselections",
            Self::TooManyMultiselections => "too_many_multiselections",
            Self::ContentRequired => "content_required",
            Self::ContentNotAllowed => "content_not_allowed",
            Self::ContentBelowMin => "content_below_min",
            Self::ContentOverMax => "content_over_max",
            Self::UnambiguousContentUnitRequired => "unambiguous_content_unit_required",
            Self::ContentUnitsBelowMin => "content_units_below_min",
            Self::ContentUnitsOverMax => "content_units_over_max",
            Self::TimeRequired => "time_required",
            Self::TimeNotAllowed => "time_not_allowed",
            Self::TimeBelowMin => "time_below_min",
            Self::TimeOverMax => "time_over_max",
            Self::TimeOrProgressiveRequired => "time_or_progressive_required",
            Self::IrregularTimeNotAllowed => "irregular_time_not_allowed",
            Self::ProgressiveRequired => "progressive_required",
            Self::ProgressiveNotAllowed => "progressive_not_allowed",
            Self::CombinationValuesNotAllowed => "combination_values_not_allowed",
            Self::NegativeDataNotAllowed => "negative_data_not_allowed",
            Self::FirstMultiselectBelowMin => "first_multiselect_below_min",
            Self::FirstMultiselectOverMax => "first_multiselect_over_max",
            Self::SecondMultiselectBelowMin => "second_multiselect_below_min",
            Self::SecondMultiselectOverMax => "second_multiselect_over_max",
            Self::MultiselectProductBelowMin => "multiselect_product_below_min",
            Self::MultiselectProductOverMax => "multiselect_product_over_max",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One rule violation: the reason, the offending dimension if there is one,
/// and the values needed to format a message.
///
/// Range violations carry `[actual, limit]` in `params`, where `limit` is the
/// violated bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectionInfo {
    pub reason: RejectionReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<DimensionRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<usize>,
}

impl RejectionInfo {
    #[must_use]
    pub const fn new(reason: RejectionReason) -> Self {
        Self {
            reason,
            subject: None,
            params: Vec::new(),
        }
    }

    /// A range violation: `actual` fell outside the bound `limit`.
    #[must_use]
    pub fn out_of_range(
        reason: RejectionReason,
        subject: Option<DimensionRef>,
        actual: usize,
        limit: usize,
    ) -> Self {
        Self {
            reason,
            subject,
            params: vec![actual, limit],
        }
    }

    #[must_use]
    pub fn with_subject(mut self, subject: DimensionRef) -> Self {
        self.subject = Some(subject);
        self
    }

    #[must_use]
    pub fn actual(&self) -> Option<usize> {
        self.params.first().copied()
    }

    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.params.get(1).copied()
    }

    fn subject_code(&self) -> &str {
        self.subject.as_ref().map_or("?", |subject| subject.code.as_str())
    }
}

/// English description; other languages are rendered by the presentation
/// layer from the reason code and params.
impl fmt::Display for RejectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actual = self.actual().unwrap_or_default();
        let limit = self.limit().unwrap_or_default();
        let code = self.subject_code();
        match self.reason {
            RejectionReason::NotEnoughMultiselections => write!(
                f,
                "at least {limit} dimensions with multiple selected values are required, found {actual}"
            ),
            RejectionReason::TooManyMultiselections => write!(
                f,
                "at most {limit} dimensions with multiple selected values are allowed, found {actual}"
            ),
            RejectionReason::ContentRequired => f.write_str("a content dimension is required"),
            RejectionReason::ContentNotAllowed => {
                write!(f, "content dimension '{code}' is not allowed")
            }
            RejectionReason::ContentBelowMin => write!(
                f,
                "at least {limit} content values must be selected, found {actual}"
            ),
            RejectionReason::ContentOverMax => write!(
                f,
                "at most {limit} content values can be selected, found {actual}"
            ),
            RejectionReason::UnambiguousContentUnitRequired => {
                f.write_str("the selected content values must share a single unit")
            }
            RejectionReason::ContentUnitsBelowMin => write!(
                f,
                "at least {limit} different content units are required, found {actual}"
            ),
            RejectionReason::ContentUnitsOverMax => write!(
                f,
                "at most {limit} different content units are allowed, found {actual}"
            ),
            RejectionReason::TimeRequired => f.write_str("a time dimension is required"),
            RejectionReason::TimeNotAllowed => write!(f, "time dimension '{code}' is not allowed"),
            RejectionReason::TimeBelowMin => write!(
                f,
                "at least {limit} time periods must be selected from '{code}', found {actual}"
            ),
            RejectionReason::TimeOverMax => write!(
                f,
                "at most {limit} time periods can be selected from '{code}', found {actual}"
            ),
            RejectionReason::TimeOrProgressiveRequired => f.write_str(
                "a time or ordinal dimension with multiple selected values is required",
            ),
            RejectionReason::IrregularTimeNotAllowed => {
                write!(f, "time dimension '{code}' has irregular intervals")
            }
            RejectionReason::ProgressiveRequired => f.write_str(
                "one of the two largest multiselect dimensions must be ordinal",
            ),
            RejectionReason::ProgressiveNotAllowed => {
                write!(f, "ordinal dimension '{code}' cannot be used as categories")
            }
            RejectionReason::CombinationValuesNotAllowed => {
                write!(f, "dimension '{code}' includes a combination value")
            }
            RejectionReason::NegativeDataNotAllowed => f.write_str("the data contains negative values"),
            RejectionReason::FirstMultiselectBelowMin
            | RejectionReason::SecondMultiselectBelowMin => write!(
                f,
                "dimension '{code}' must have at least {limit} selected values, found {actual}"
            ),
            RejectionReason::FirstMultiselectOverMax
            | RejectionReason::SecondMultiselectOverMax => write!(
                f,
                "dimension '{code}' can have at most {limit} selected values, found {actual}"
            ),
            RejectionReason::MultiselectProductBelowMin => write!(
                f,
                "the selection produces {actual} series, at least {limit} are required"
            ),
            RejectionReason::MultiselectProductOverMax => write!(
                f,
                "the selection produces {actual} series, at most {limit} are allowed"
            ),
        }
    }
}

#[cfg(test)]
#[path = "reason_tests.rs"]
mod tests;
