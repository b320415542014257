use std::fs;

use crate::config::{DEFAULT_PRESET, preset_source};
use crate::{ChartRulesError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

const TEMPLATE_HEADER: &str = r#"# px-chart-rules limits file
#
# Each limit is a string:
#   "ignore"       the count is not checked
#   "not allowed"  the count must be zero
#   "3"            exactly three
#   "2-10"         between two and ten, inclusive
#
# Uncomment `preset` to build on a preset other than "default".
# preset = "default"

"#;

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a limits file holding the default limits.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ChartRulesError::Config(format!(
            "Limits file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    let template = generate_config_template()?;
    fs::write(output_path, template)?;

    println!("Created limits file: {}", output_path.display());
    Ok(())
}

/// The default limits file: a short header followed by every chart's limits.
///
/// # Errors
/// Returns an error if the default preset is missing.
pub fn generate_config_template() -> Result<String> {
    Ok(format!("{TEMPLATE_HEADER}{}", preset_source(DEFAULT_PRESET)?))
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
