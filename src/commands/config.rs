use std::fmt::Write;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::cli::{Cli, ConfigAction};
use crate::config::{CONFIG_VERSION, LoadResult, parse_config, resolve_limits};
use crate::limits::{ChartTypeLimits, LimitsTable};
use crate::output::OutputFormat;
use crate::visualization::VisualizationType;
use crate::{ChartRulesError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{load_limits, write_output};

#[must_use]
pub fn run_config(args: &crate::cli::ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config, cli),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path, cli: &Cli) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(table) => {
            if !cli.quiet {
                println!(
                    "Limits file is valid: {} ({} chart types)",
                    config_path.display(),
                    table.len()
                );
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error [{}]: {e}", e.error_type());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a limits file and returns the limits it resolves to.
///
/// # Errors
/// Returns an error if the file doesn't exist, is not valid TOML, has unknown
/// keys, an unsupported version or preset, or a limit string that does not parse.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<LimitsTable> {
    if !config_path.exists() {
        return Err(ChartRulesError::Config(format!(
            "Limits file not found: {}",
            config_path.display()
        )));
    }

    let content =
        std::fs::read_to_string(config_path).map_err(|source| ChartRulesError::FileRead {
            path: config_path.to_path_buf(),
            source,
        })?;
    let config = parse_config(&content)?;
    resolve_limits(&config)
}

fn run_config_show(config_path: Option<&Path>, format: OutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli) {
        Ok(output) => match write_output(None, &output, cli.quiet) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                EXIT_CONFIG_ERROR
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

#[derive(Serialize)]
struct JsonLimits<'a> {
    source: String,
    charts: IndexMap<VisualizationType, &'a ChartTypeLimits>,
}

/// Renders the effective limits.
///
/// # Errors
/// Returns an error if the limits cannot be loaded or serialized.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: OutputFormat,
    cli: &Cli,
) -> Result<String> {
    let loaded = load_limits(config_path, cli.no_config)?;

    match format {
        OutputFormat::Json => {
            let output = JsonLimits {
                source: loaded.source.to_string(),
                charts: loaded.limits.iter().collect(),
            };
            let json = serde_json::to_string_pretty(&output)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => Ok(format_config_text(&loaded)),
    }
}

/// Renders the effective limits as a complete limits file.
#[must_use]
pub(crate) fn format_config_text(loaded: &LoadResult) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Effective limits (source: {})", loaded.source);
    let _ = writeln!(output, "version = \"{CONFIG_VERSION}\"");

    for (chart, limits) in loaded.limits.iter() {
        let _ = writeln!(output);
        let _ = writeln!(output, "[charts.{chart}]");
        for (name, range) in limits.fields() {
            let _ = writeln!(output, "{name} = \"{range}\"");
        }
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
