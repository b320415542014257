use tracing::info;

use crate::checker::VisualizationChecker;
use crate::cli::{Cli, ExplainArgs};
use crate::selection::VisualizationTypeSelectionObject;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{color_choice_to_mode, load_limits, with_trailing_newline, write_output};

#[must_use]
pub fn run_explain(args: &ExplainArgs, cli: &Cli) -> i32 {
    match run_explain_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Prints every rejection of one chart type, ranked by priority.
///
/// # Errors
/// Returns an error if the limits or the selection cannot be loaded.
pub(crate) fn run_explain_impl(args: &ExplainArgs, cli: &Cli) -> crate::Result<()> {
    let loaded = load_limits(args.config.as_deref(), cli.no_config)?;
    info!(source = %loaded.source, chart = %args.chart, "explaining chart");

    let selection = VisualizationTypeSelectionObject::load(&args.selection)?;
    let explanation = VisualizationChecker::new(loaded.limits).explain(&selection, args.chart);

    let output = args
        .format
        .formatter(color_choice_to_mode(cli.color), cli.verbose)
        .format_explanation(&explanation)?;
    write_output(None, &with_trailing_newline(output), cli.quiet)
}

#[cfg(test)]
#[path = "explain_tests.rs"]
mod tests;
