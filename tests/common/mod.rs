#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the line-tally binary.
#[macro_export]
macro_rules! line_tally {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("line-tally"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content and returns its path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".line-tally.toml", content);
    }
}

pub const PYTHON_SOURCE: &str = "x = 1\n\n# comment\ny = 2\n";

pub const JS_SOURCE: &str = "a;\n/* start\nmiddle\nend */\nb;\n";
