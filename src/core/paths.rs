//! Path normalization utilities
//!
//! Document paths in status messages use '/' as separator and are shown
//! relative to the input directory when possible.

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Relative path if under `root`, otherwise the normalized full path
pub fn display_path(path: &Path, root: &Path) -> String {
    make_relative(path, root)
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| normalize_path(path))
}

/// Whether a file name carries the given extension (without the dot)
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(&format!(".{}", extension)))
        .unwrap_or(false)
}
