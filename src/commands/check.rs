use tracing::info;

use crate::checker::{Checker, VisualizationChecker};
use crate::cli::{CheckArgs, Cli};
use crate::output::ColorMode;
use crate::selection::VisualizationTypeSelectionObject;
use crate::{EXIT_CHART_REJECTED, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{color_choice_to_mode, load_limits, with_trailing_newline, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Evaluates the selection against every chart type and writes the report.
///
/// Returns `EXIT_CHART_REJECTED` when `--chart` names a rejected chart type.
///
/// # Errors
/// Returns an error if the limits or the selection cannot be loaded, or the
/// report cannot be written.
pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    let loaded = load_limits(args.config.as_deref(), cli.no_config)?;
    info!(source = %loaded.source, "using limits");

    let selection = VisualizationTypeSelectionObject::load(&args.selection)?;
    let checker = VisualizationChecker::new(loaded.limits);
    let report = checker.check(&selection);

    let color_mode = if args.output.is_some() {
        ColorMode::Never
    } else {
        color_choice_to_mode(cli.color)
    };
    let output = args
        .format
        .formatter(color_mode, cli.verbose)
        .format(&report)?;
    write_output(
        args.output.as_deref(),
        &with_trailing_newline(output),
        cli.quiet,
    )?;

    let exit_code = match args.chart {
        Some(chart) if !report.is_compatible(chart) => EXIT_CHART_REJECTED,
        _ => EXIT_SUCCESS,
    };
    Ok(exit_code)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
