//! Assertion macros for CLI tests.
//!
//! These macros list what actually exists on failure to aid debugging.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files.sort();
    files
}

/// Assert that an icon was placed under the icons directory.
///
/// # Example
/// ```ignore
/// assert_placed!(env, "Tier_1_Common/icon_1.png");
/// ```
#[macro_export]
macro_rules! assert_placed {
    ($env:expr, $path:expr) => {
        let full_path = $env.icon_path($path);
        assert!(
            full_path.is_file(),
            "Expected icon at '{}', but it doesn't exist.\nFiles found:\n  {}",
            $path,
            $crate::common::list_all_files($env.project_root.path()).join("\n  ")
        );
    };
}

/// Assert that an icon was NOT placed.
#[macro_export]
macro_rules! assert_not_placed {
    ($env:expr, $path:expr) => {
        let full_path = $env.icon_path($path);
        assert!(
            !full_path.exists(),
            "Expected no icon at '{}', but it exists",
            $path
        );
    };
}

/// Assert that stdout or stderr contains a string.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($needle),
            "Expected output to contain {:?}.\nstdout:\n{}\nstderr:\n{}",
            $needle,
            $result.stdout,
            $result.stderr
        );
    };
}
