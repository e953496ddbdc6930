//! Common test utilities

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temp project directory to run commands against
pub fn create_test_project() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let project_root = temp_dir.path().to_path_buf();
    (temp_dir, project_root)
}

/// Write a pseudopy.toml into the project
pub fn write_config(project_root: &PathBuf, contents: &str) -> PathBuf {
    let path = project_root.join("pseudopy.toml");
    fs::write(&path, contents).expect("Failed to write config");
    path
}

/// Write a pseudocode source file into the project
pub fn write_source(project_root: &PathBuf, name: &str, contents: &str) -> PathBuf {
    let path = project_root.join(name);
    fs::write(&path, contents).expect("Failed to write source");
    path
}
