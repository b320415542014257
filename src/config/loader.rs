use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ChartRulesError, Result};
use crate::limits::LimitsTable;

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::LimitsConfig;
use super::presets::{DEFAULT_PRESET, load_preset};
use super::validation::resolve_limits;

/// Where the effective limits came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Preset(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Preset(name) => write!(f, "built-in preset '{name}'"),
        }
    }
}

/// Result of loading limits, with the source they were resolved from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub limits: LimitsTable,
    pub source: ConfigSource,
}

impl LoadResult {
    /// The built-in default limits, used when no file applies.
    ///
    /// # Errors
    /// Returns an error if the built-in preset fails to parse.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            limits: load_preset(DEFAULT_PRESET)?,
            source: ConfigSource::Preset(DEFAULT_PRESET.to_string()),
        })
    }
}

/// Trait for loading limits from various sources.
pub trait ConfigLoader {
    /// Load limits from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load limits from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Loads limits from the filesystem.
///
/// Search order:
/// 1. `.px-chart-rules.toml` in current directory
/// 2. `config.toml` in the platform config directory
/// 3. The built-in `default` preset
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }
}

/// Parse limits file content without resolving it.
///
/// # Errors
/// Returns an error for invalid TOML or unknown keys.
pub fn parse_config(content: &str) -> Result<LimitsConfig> {
    Ok(toml::from_str(content)?)
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        for path in self.fs.limits_candidates() {
            if self.fs.is_file(&path) {
                return self.load_from_path(&path);
            }
            debug!(path = %path.display(), "no limits file");
        }
        debug!(preset = DEFAULT_PRESET, "using built-in limits");
        LoadResult::builtin()
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| ChartRulesError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config = parse_config(&content)?;
        let limits = resolve_limits(&config)?;
        debug!(path = %path.display(), charts = config.charts.len(), "loaded limits file");
        Ok(LoadResult {
            limits,
            source: ConfigSource::File(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
