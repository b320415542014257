mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::checker::{ChartExplanation, SelectionReport};
use crate::error::Result;

/// Trait for rendering evaluation results.
pub trait OutputFormatter {
    /// Format the eligibility of every chart type.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &SelectionReport) -> Result<String>;

    /// Format the ranked rejection chain of one chart type.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_explanation(&self, explanation: &ChartExplanation) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Formatter for this format.
    #[must_use]
    pub fn formatter(self, color_mode: ColorMode, verbose: u8) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter::with_verbose(color_mode, verbose)),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
