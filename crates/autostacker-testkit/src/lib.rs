//! Test utilities for autostacker
//!
//! This crate provides shared testing utilities used across the autostacker workspace.

mod env;

pub use env::{ENV_LOCK, ISOLATED_VARS, with_isolated_env};

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// Cargo runs tests from the crate root, so test files end up in a single
/// gitignored location that is easy to clean up manually if needed.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use autostacker_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let tmp_base = std::env::current_dir()?.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Write `content` to `root/relative`, creating parent directories
///
/// Returns the full path of the written file.
///
/// # Panics
///
/// Panics if the directories or the file cannot be written.
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("cannot create {}: {e}", parent.display()));
    }
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("cannot write {}: {e}", path.display()));
    path
}
