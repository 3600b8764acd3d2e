//! Common test utilities for depboot integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Environment variables that would leak host configuration into a test
const DEPBOOT_ENV: &[&str] = &[
    "DEPBOOT_WORKSPACE",
    "DEPBOOT_MANIFEST",
    "DEPBOOT_INSTALLER",
    "DEPBOOT_LOG",
];

/// A scratch workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write requirements.txt
    pub fn write_manifest(&self, content: &str) {
        self.write_file("requirements.txt", content);
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// depboot command running inside the workspace with a clean environment
    pub fn depboot_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("depboot").expect("Failed to find depboot binary");
        cmd.current_dir(&self.path);
        for var in DEPBOOT_ENV {
            cmd.env_remove(var);
        }
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
