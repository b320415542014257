//! Query-shape descriptor.
//!
//! A [`VisualizationTypeSelectionObject`] summarizes the current query of a data
//! cube: which dimensions it has, how many values are selected from each, and a
//! few data-level flags. It is built by the metadata layer and only read here.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChartRulesError, Result};

/// Role of a dimension in the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimensionType {
    Content,
    Time,
    Ordinal,
    Nominal,
    Geographical,
    Other,
}

/// One dimension of the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionInfo {
    pub code: String,
    #[serde(rename = "type")]
    pub dimension_type: DimensionType,
    /// Number of currently selected values.
    pub size: usize,
    /// Code of a selected value that aggregates the others, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combination_value_code: Option<String>,
}

impl DimensionInfo {
    #[must_use]
    pub fn new(code: impl Into<String>, dimension_type: DimensionType, size: usize) -> Self {
        Self {
            code: code.into(),
            dimension_type,
            size,
            combination_value_code: None,
        }
    }

    #[must_use]
    pub fn with_combination_value(mut self, value_code: impl Into<String>) -> Self {
        self.combination_value_code = Some(value_code.into());
        self
    }

    #[must_use]
    pub const fn is_multiselect(&self) -> bool {
        self.size > 1
    }

    #[must_use]
    pub fn has_combination_value(&self) -> bool {
        self.combination_value_code
            .as_deref()
            .is_some_and(|code| !code.is_empty())
    }

    #[must_use]
    pub fn is_ordinal(&self) -> bool {
        self.dimension_type == DimensionType::Ordinal
    }
}

/// Reference to a dimension by position and code, used as a rejection subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionRef {
    pub index: usize,
    pub code: String,
}

/// A dimension together with its position in the selection.
#[derive(Debug, Clone, Copy)]
pub struct SelectedDimension<'a> {
    pub index: usize,
    pub info: &'a DimensionInfo,
}

impl SelectedDimension<'_> {
    #[must_use]
    pub fn to_ref(&self) -> DimensionRef {
        DimensionRef {
            index: self.index,
            code: self.info.code.clone(),
        }
    }
}

/// The shape of a query, as consumed by the visualization rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationTypeSelectionObject {
    pub dimensions: Vec<DimensionInfo>,
    #[serde(default)]
    pub has_negative_data: bool,
    /// Selected content values; defaults to the content dimension's size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_selection_count: Option<usize>,
    /// Distinct units among the selected content values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_unit_count: Option<usize>,
    #[serde(default)]
    pub content_units_ambiguous: bool,
    #[serde(default)]
    pub time_is_irregular: bool,
}

impl VisualizationTypeSelectionObject {
    #[must_use]
    pub const fn new(dimensions: Vec<DimensionInfo>) -> Self {
        Self {
            dimensions,
            has_negative_data: false,
            content_selection_count: None,
            content_unit_count: None,
            content_units_ambiguous: false,
            time_is_irregular: false,
        }
    }

    #[must_use]
    pub const fn with_negative_data(mut self) -> Self {
        self.has_negative_data = true;
        self
    }

    #[must_use]
    pub const fn with_irregular_time(mut self) -> Self {
        self.time_is_irregular = true;
        self
    }

    /// Mark the selected content values as having `unit_count` distinct units.
    #[must_use]
    pub const fn with_content_units(mut self, unit_count: usize) -> Self {
        self.content_unit_count = Some(unit_count);
        self.content_units_ambiguous = unit_count > 1;
        self
    }

    #[must_use]
    pub const fn with_content_selection_count(mut self, count: usize) -> Self {
        self.content_selection_count = Some(count);
        self
    }

    /// Load a selection from a JSON file and validate it.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// describes an impossible selection.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ChartRulesError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate a selection.
    ///
    /// # Errors
    /// Returns an error if `json` is malformed or the selection is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let selection: Self = serde_json::from_str(json)?;
        selection.validate()?;
        Ok(selection)
    }

    /// Check that every dimension has a positive size and that the content
    /// and time roles are each used at most once.
    ///
    /// # Errors
    /// Returns [`ChartRulesError::InvalidSelection`] describing the first problem.
    pub fn validate(&self) -> Result<()> {
        if let Some(empty) = self.dimensions.iter().find(|dim| dim.size == 0) {
            return Err(ChartRulesError::InvalidSelection(format!(
                "dimension '{}' has no selected values",
                empty.code
            )));
        }
        for role in [DimensionType::Content, DimensionType::Time] {
            let count = self
                .dimensions
                .iter()
                .filter(|dim| dim.dimension_type == role)
                .count();
            if count > 1 {
                return Err(ChartRulesError::InvalidSelection(format!(
                    "found {count} dimensions of type {role:?}, at most one is allowed"
                )));
            }
        }
        if self.content_dimension().is_some() && self.content_selection_count == Some(0) {
            return Err(ChartRulesError::InvalidSelection(
                "contentSelectionCount must be positive when a content dimension exists".to_string(),
            ));
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = SelectedDimension<'_>> {
        self.dimensions
            .iter()
            .enumerate()
            .map(|(index, info)| SelectedDimension { index, info })
    }

    pub fn multiselects(&self) -> impl Iterator<Item = SelectedDimension<'_>> {
        self.iter().filter(|dim| dim.info.is_multiselect())
    }

    #[must_use]
    pub fn multiselect_count(&self) -> usize {
        self.multiselects().count()
    }

    /// Multiselect dimensions by descending size; equal sizes keep declared order.
    #[must_use]
    pub fn multiselects_by_size(&self) -> Vec<SelectedDimension<'_>> {
        let mut dims: Vec<_> = self.multiselects().collect();
        dims.sort_by(|a, b| b.info.size.cmp(&a.info.size));
        dims
    }

    #[must_use]
    pub fn largest_multiselect(&self) -> Option<SelectedDimension<'_>> {
        self.multiselects_by_size().into_iter().next()
    }

    #[must_use]
    pub fn second_largest_multiselect(&self) -> Option<SelectedDimension<'_>> {
        self.multiselects_by_size().into_iter().nth(1)
    }

    #[must_use]
    pub fn content_dimension(&self) -> Option<SelectedDimension<'_>> {
        self.iter()
            .find(|dim| dim.info.dimension_type == DimensionType::Content)
    }

    #[must_use]
    pub fn time_dimension(&self) -> Option<SelectedDimension<'_>> {
        self.iter()
            .find(|dim| dim.info.dimension_type == DimensionType::Time)
    }

    /// The dimension that runs along the primary axis of line and vertical bar
    /// charts: the time dimension when it is multiselect, otherwise the largest
    /// ordinal multiselect.
    #[must_use]
    pub fn time_or_largest_ordinal(&self) -> Option<SelectedDimension<'_>> {
        if let Some(time) = self.time_dimension()
            && time.info.is_multiselect()
        {
            return Some(time);
        }
        self.multiselects_by_size()
            .into_iter()
            .find(|dim| dim.info.is_ordinal())
    }

    /// Selected content values, falling back to the content dimension's size.
    #[must_use]
    pub fn content_selection_count(&self) -> usize {
        self.content_selection_count.unwrap_or_else(|| {
            self.content_dimension()
                .map_or(0, |content| content.info.size)
        })
    }

    /// Distinct content units, falling back to 2 for ambiguous units and 1 otherwise.
    #[must_use]
    pub fn content_unit_count(&self) -> usize {
        self.content_unit_count
            .unwrap_or(if self.content_units_ambiguous { 2 } else { 1 })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
