pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod limits;
pub mod output;
pub mod selection;
pub mod visualization;

pub use error::{ChartRulesError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHART_REJECTED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
