use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::output::OutputFormat;
use crate::visualization::VisualizationType;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect based on terminal
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "px-chart-rules")]
#[command(
    author,
    version,
    about = "Decide which chart types can display a Px data cube selection"
)]
#[command(long_about = "Evaluates a query shape against the rules of every chart type and \
    reports, for each rejected type, the single most relevant reason.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - The chart type requested with --chart is rejected\n  \
    2 - Configuration or input error")]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Ignore limits files and use the built-in preset
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a selection against every chart type
    Check(CheckArgs),

    /// Show every rejection of one chart type, ranked
    Explain(ExplainArgs),

    /// Write a limits file with the default limits
    Init(InitArgs),

    /// Limits file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Selection file (JSON)
    pub selection: PathBuf,

    /// Path to limits file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Fail with exit code 1 when this chart type is rejected
    #[arg(long)]
    pub chart: Option<VisualizationType>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ExplainArgs {
    /// Selection file (JSON)
    pub selection: PathBuf,

    /// Chart type to explain (e.g. `line_chart`, `LineChart`)
    #[arg(long)]
    pub chart: VisualizationType,

    /// Path to limits file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the limits file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate a limits file
    Validate {
        /// Path to limits file
        #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
        config: PathBuf,
    },

    /// Show the effective limits
    Show {
        /// Path to limits file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
