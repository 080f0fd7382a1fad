//! Common test utilities for Themeweld integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test project tree for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new empty project tree
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project tree, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a theme fragment with placeholder content
    pub fn write_fragment(&self, path: &str) {
        self.write_file(path, "// fragment\n");
    }

    /// Read a file from the project tree
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project tree
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Path of the manifest written by a default-output run
    pub fn manifest(&self) -> String {
        self.read_file("generated-themes/aggregated-themes.scss")
    }

    /// Whether the default-output manifest exists
    pub fn manifest_exists(&self) -> bool {
        self.file_exists("generated-themes/aggregated-themes.scss")
    }
}
