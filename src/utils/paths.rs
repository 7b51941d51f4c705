//! Path normalization

use std::path::Path;

/// Render a path with forward slashes regardless of platform, so report
/// output and ignore matching see the same spelling.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Relative path of `path` under `root` as a normalized string.
pub fn relative_display(root: &Path, path: &Path) -> Option<String> {
    path.strip_prefix(root).ok().and_then(|p| p.to_str()).map(normalize_path)
}
