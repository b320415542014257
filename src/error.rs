use std::path::PathBuf;

use thiserror::Error;

use crate::limits::RangeError;

#[derive(Error, Debug)]
pub enum ChartRulesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid limit for {key}: {source}")]
    InvalidLimit {
        key: String,
        #[source]
        source: RangeError,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChartRulesError {
    /// Short category name, used as a prefix in CLI error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::InvalidLimit { .. } | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::InvalidSelection(_) | Self::Json(_) => "Selection",
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartRulesError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
