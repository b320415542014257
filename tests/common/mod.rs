#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the px-chart-rules binary.
#[macro_export]
macro_rules! px_chart_rules {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("px-chart-rules"))
    };
}

/// Content, ten years and five regions: a classic line chart.
pub const LINE_SELECTION: &str = r#"{
    "dimensions": [
        {"code": "Tiedot", "type": "Content", "size": 1},
        {"code": "Vuosi", "type": "Time", "size": 10},
        {"code": "Alue", "type": "Other", "size": 5}
    ]
}"#;

/// Single values everywhere: only tables and key figures fit.
pub const SINGLE_VALUE_SELECTION: &str = r#"{
    "dimensions": [
        {"code": "Tiedot", "type": "Content", "size": 1},
        {"code": "Vuosi", "type": "Time", "size": 1},
        {"code": "Muu", "type": "Other", "size": 1}
    ]
}"#;

/// Six regions including a total.
pub const COMBINATION_SELECTION: &str = r#"{
    "dimensions": [
        {"code": "Tiedot", "type": "Content", "size": 1},
        {"code": "Alue", "type": "Other", "size": 6, "combinationValueCode": "SSS"}
    ]
}"#;

/// A limits file that only tightens the line chart product.
pub const TIGHT_LINE_CONFIG: &str = r#"version = "1"

[charts.line_chart]
multiselect_product = "1-4"
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `selection.json` with the given content.
    pub fn create_selection(&self, content: &str) -> PathBuf {
        self.create_file("selection.json", content)
    }

    /// Creates the discovered `.px-chart-rules.toml` limits file.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".px-chart-rules.toml", content)
    }
}
