//! Limit checks shared by every chart type.
//!
//! Each check compares one measurement of the selection against the matching
//! [`DimensionRange`] of the chart's [`ChartTypeLimits`] and appends a
//! [`RejectionInfo`] for every violated bound.

use crate::limits::{ChartTypeLimits, DimensionRange, RangeViolation};
use crate::selection::{DimensionRef, VisualizationTypeSelectionObject};

use super::reason::{RejectionInfo, RejectionReason};

/// Which multiselect dimensions contribute to the multiselect product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductScope {
    /// Every multiselect dimension.
    AllMultiselects,
    /// Every multiselect dimension except the axis (time or largest ordinal),
    /// whose values become points along a series rather than separate series.
    ExcludeAxis,
}

/// Run every shared limit check, in a fixed order.
#[must_use]
pub fn check_limits(
    selection: &VisualizationTypeSelectionObject,
    limits: &ChartTypeLimits,
    scope: ProductScope,
) -> Vec<RejectionInfo> {
    let mut rejections = Vec::new();
    check_multiselect_count(selection, limits, &mut rejections);
    check_content(selection, limits, &mut rejections);
    check_time(selection, limits, &mut rejections);
    check_multiselect_sizes(selection, limits, &mut rejections);
    check_multiselect_product(selection, limits, scope, &mut rejections);
    rejections
}

fn push_violation(
    out: &mut Vec<RejectionInfo>,
    range: DimensionRange,
    actual: usize,
    (below, over): (RejectionReason, RejectionReason),
    subject: Option<DimensionRef>,
) {
    match range.violation(actual) {
        Some(RangeViolation::BelowMin(min)) => {
            out.push(RejectionInfo::out_of_range(below, subject, actual, min));
        }
        Some(RangeViolation::OverMax(max)) => {
            out.push(RejectionInfo::out_of_range(over, subject, actual, max));
        }
        None => {}
    }
}

fn check_multiselect_count(
    selection: &VisualizationTypeSelectionObject,
    limits: &ChartTypeLimits,
    out: &mut Vec<RejectionInfo>,
) {
    push_violation(
        out,
        limits.multiselect_count,
        selection.multiselect_count(),
        (
            RejectionReason::NotEnoughMultiselections,
            RejectionReason::TooManyMultiselections,
        ),
        None,
    );
}

fn check_content(
    selection: &VisualizationTypeSelectionObject,
    limits: &ChartTypeLimits,
    out: &mut Vec<RejectionInfo>,
) {
    let Some(content) = selection.content_dimension() else {
        if !limits.content.contains(0) {
            out.push(RejectionInfo::new(RejectionReason::ContentRequired));
        }
        return;
    };

    if limits.content.is_not_allowed() {
        out.push(
            RejectionInfo::new(RejectionReason::ContentNotAllowed).with_subject(content.to_ref()),
        );
        return;
    }

    push_violation(
        out,
        limits.content,
        selection.content_selection_count(),
        (
            RejectionReason::ContentBelowMin,
            RejectionReason::ContentOverMax,
        ),
        Some(content.to_ref()),
    );

    if selection.content_units_ambiguous && forbids_ambiguous_units(limits.content_units) {
        out.push(
            RejectionInfo::new(RejectionReason::UnambiguousContentUnitRequired)
                .with_subject(content.to_ref()),
        );
    } else if !limits.content_units.is_not_allowed() {
        push_violation(
            out,
            limits.content_units,
            selection.content_unit_count(),
            (
                RejectionReason::ContentUnitsBelowMin,
                RejectionReason::ContentUnitsOverMax,
            ),
            Some(content.to_ref()),
        );
    }
}

/// A unit limit of at most one unit (or none) means mixed units are refused outright.
fn forbids_ambiguous_units(range: DimensionRange) -> bool {
    range.max().is_some_and(|max| max <= 1)
}

fn check_time(
    selection: &VisualizationTypeSelectionObject,
    limits: &ChartTypeLimits,
    out: &mut Vec<RejectionInfo>,
) {
    let Some(time) = selection.time_dimension() else {
        if !limits.time.contains(0) {
            out.push(RejectionInfo::new(RejectionReason::TimeRequired));
        }
        return;
    };

    if limits.time.is_not_allowed() {
        out.push(RejectionInfo::new(RejectionReason::TimeNotAllowed).with_subject(time.to_ref()));
        return;
    }

    push_violation(
        out,
        limits.time,
        time.info.size,
        (RejectionReason::TimeBelowMin, RejectionReason::TimeOverMax),
        Some(time.to_ref()),
    );
}

fn check_multiselect_sizes(
    selection: &VisualizationTypeSelectionObject,
    limits: &ChartTypeLimits,
    out: &mut Vec<RejectionInfo>,
) {
    let by_size = selection.multiselects_by_size();

    if let Some(first) = by_size.first() {
        push_violation(
            out,
            limits.first_multiselect_size,
            first.info.size,
            (
                RejectionReason::FirstMultiselectBelowMin,
                RejectionReason::FirstMultiselectOverMax,
            ),
            Some(first.to_ref()),
        );
    }
    if let Some(second) = by_size.get(1) {
        push_violation(
            out,
            limits.second_multiselect_size,
            second.info.size,
            (
                RejectionReason::SecondMultiselectBelowMin,
                RejectionReason::SecondMultiselectOverMax,
            ),
            Some(second.to_ref()),
        );
    }
}

/// Product of multiselect sizes within `scope`; 1 when nothing contributes.
#[must_use]
pub fn multiselect_product(
    selection: &VisualizationTypeSelectionObject,
    scope: ProductScope,
) -> usize {
    let excluded = match scope {
        ProductScope::AllMultiselects => None,
        ProductScope::ExcludeAxis => selection.time_or_largest_ordinal().map(|axis| axis.index),
    };
    selection
        .multiselects()
        .filter(|dim| Some(dim.index) != excluded)
        .fold(1_usize, |product, dim| product.saturating_mul(dim.info.size))
}

fn check_multiselect_product(
    selection: &VisualizationTypeSelectionObject,
    limits: &ChartTypeLimits,
    scope: ProductScope,
    out: &mut Vec<RejectionInfo>,
) {
    push_violation(
        out,
        limits.multiselect_product,
        multiselect_product(selection, scope),
        (
            RejectionReason::MultiselectProductBelowMin,
            RejectionReason::MultiselectProductOverMax,
        ),
        None,
    );
}

#[cfg(test)]
#[path = "generic_tests.rs"]
mod tests;
