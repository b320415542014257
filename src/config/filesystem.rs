//! Where limits files are looked up, and how they are read.

use std::path::{Path, PathBuf};

/// Name of the limits file looked up in the current directory.
pub const LOCAL_CONFIG_NAME: &str = ".px-chart-rules.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Access to the places a limits file can live.
///
/// The loader only talks to this trait, so discovery can run against an
/// in-memory layout in tests.
pub trait FileSystem {
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Whether `path` is a regular file. A directory named like a limits file
    /// does not count.
    fn is_file(&self, path: &Path) -> bool;

    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Per-user directory holding `config.toml`, e.g. `~/.config/px-chart-rules`
    /// on Linux. `None` when no home directory is known.
    fn config_dir(&self) -> Option<PathBuf>;

    /// Limits file locations in lookup order: `.px-chart-rules.toml` in the
    /// current directory, then `config.toml` in the user config directory.
    fn limits_candidates(&self) -> Vec<PathBuf> {
        let local = self
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME));
        let user = self.config_dir().map(|dir| dir.join(USER_CONFIG_NAME));
        local.into_iter().chain(user).collect()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "px-chart-rules")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

#[cfg(test)]
#[path = "filesystem_tests.rs"]
mod tests;
