mod explain;
mod generic;
mod priority;
mod reason;
mod result;
mod rules;
mod selector;

pub use explain::{ChartExplanation, RankStatus, RankedRejection};
pub use generic::{ProductScope, multiselect_product};
pub use priority::{best_rejection, rank_of, rank_rejections};
pub use reason::{RejectionInfo, RejectionReason};
pub use result::{Eligibility, SelectionReport};
pub use rules::ChartRules;
pub use selector::VisualizationChecker;

use crate::selection::VisualizationTypeSelectionObject;

pub trait Checker {
    /// Evaluate a selection against every chart type.
    ///
    /// The report lists each chart type once, in declaration order, with its
    /// representative rejection when it cannot display the selection.
    fn check(&self, selection: &VisualizationTypeSelectionObject) -> SelectionReport;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
