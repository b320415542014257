use indexmap::{IndexMap, IndexSet};
use crate::visualization::VisualizationType;

use super::reason::RejectionInfo;

/// Outcome of evaluating one chart type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Compatible,
    Rejected { rejection: RejectionInfo },
}

impl Eligibility {
    #[must_use]
    pub const fn is_compatible(&self) -> bool {
        matches!(self, Self::Compatible)
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<&RejectionInfo> {
        match self {
            Self::Compatible => None,
            Self::Rejected { rejection } => Some(rejection),
        }
    }
}

/// Eligibility of every chart type for one selection, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionReport {
    results: IndexMap<VisualizationType, Eligibility>,
}

impl SelectionReport {
    pub(crate) fn insert(&mut self, chart: VisualizationType, eligibility: Eligibility) {
        self.results.insert(chart, eligibility);
    }

    #[must_use]
    pub fn get(&self, chart: VisualizationType) -> Option<&Eligibility> {
        self.results.get(&chart)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VisualizationType, &Eligibility)> {
        self.results.iter().map(|(chart, eligibility)| (*chart, eligibility))
    }

    #[must_use]
    pub fn is_compatible(&self, chart: VisualizationType) -> bool {
        self.get(chart).is_some_and(Eligibility::is_compatible)
    }

    #[must_use]
    pub fn rejection(&self, chart: VisualizationType) -> Option<&RejectionInfo> {
        self.get(chart).and_then(Eligibility::rejection)
    }

    /// Compatible chart types, in evaluation order.
    #[must_use]
    pub fn valid_types(&self) -> IndexSet<VisualizationType> {
        self.iter()
            .filter(|(_, eligibility)| eligibility.is_compatible())
            .map(|(chart, _)| chart)
            .collect()
    }

    #[must_use]
    pub fn compatible_count(&self) -> usize {
        self.results.values().filter(|e| e.is_compatible()).count()
    }

    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.results.len() - self.compatible_count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
