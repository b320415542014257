use std::fmt::Write;

use crate::checker::{ChartExplanation, Eligibility, RankStatus, RankedRejection, SelectionReport};
use crate::error::Result;
use crate::visualization::VisualizationType;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn chart_label(chart: VisualizationType) -> String {
        format!("{} ({chart})", chart.display_name())
    }

    fn format_eligibility(
        &self,
        chart: VisualizationType,
        eligibility: &Eligibility,
        output: &mut String,
    ) {
        let label = Self::chart_label(chart);
        match eligibility {
            Eligibility::Compatible => {
                let status = self.colorize("COMPATIBLE", ansi::GREEN);
                let _ = writeln!(output, "✓ {status}: {label}");
            }
            Eligibility::Rejected { rejection } => {
                let status = self.colorize("REJECTED", ansi::RED);
                let _ = writeln!(output, "✗ {status}: {label}");
                let _ = writeln!(output, "   Reason: {rejection}");
                if self.verbose >= 1 {
                    let _ = writeln!(output, "   Code: {}", rejection.reason.code());
                    if let Some(subject) = &rejection.subject {
                        let _ = writeln!(
                            output,
                            "   Dimension: {} (index {})",
                            subject.code, subject.index
                        );
                    }
                }
            }
        }
    }

    fn format_summary(&self, report: &SelectionReport) -> String {
        let compatible = self.colorize(&report.compatible_count().to_string(), ansi::GREEN);
        let rejected = self.colorize(&report.rejected_count().to_string(), ansi::RED);
        format!(
            "Summary: {} chart types checked, {compatible} compatible, {rejected} rejected",
            report.len()
        )
    }

    fn format_ranked(&self, ranked: &RankedRejection, output: &mut String) {
        let (icon, status) = match ranked.status {
            RankStatus::Selected => ("✗", self.colorize("selected", ansi::RED)),
            RankStatus::Superseded => ("·", self.colorize("superseded", ansi::DIM)),
        };
        let rank = ranked
            .rank
            .map_or_else(|| "unranked".to_string(), |rank| format!("#{rank}"));
        let _ = writeln!(
            output,
            "  {icon} [{status}] {rank} {}: {}",
            ranked.rejection.reason.code(),
            ranked.rejection
        );
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &SelectionReport) -> Result<String> {
        let mut output = String::new();
        for (chart, eligibility) in report.iter() {
            self.format_eligibility(chart, eligibility, &mut output);
        }
        output.push('\n');
        let _ = writeln!(output, "{}", self.format_summary(report));
        Ok(output)
    }

    fn format_explanation(&self, explanation: &ChartExplanation) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(output, "Chart: {}", Self::chart_label(explanation.chart));
        let status = if explanation.compatible {
            self.colorize("COMPATIBLE", ansi::GREEN)
        } else {
            self.colorize("REJECTED", ansi::RED)
        };
        let _ = writeln!(output, "Status: {status}");

        output.push_str("\nLimits:\n");
        for (name, range) in explanation.limits.fields() {
            let _ = writeln!(output, "  {name} = \"{range}\"");
        }

        if explanation.chain.is_empty() {
            output.push_str("\nNo rule rejects this selection.\n");
        } else {
            output.push_str("\nRejections (most important first):\n");
            for ranked in &explanation.chain {
                self.format_ranked(ranked, &mut output);
            }
        }

        if self.verbose >= 1 {
            output.push_str("\nPriority:\n");
            for (rank, reason) in explanation.priority.iter().enumerate() {
                let _ = writeln!(output, "  #{rank} {}", reason.code());
            }
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
