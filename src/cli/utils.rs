//! Shared CLI utilities.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Canonicalize a folder argument and reject non-directories.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let root = path
        .canonicalize()
        .with_context(|| format!("Cannot resolve path: {}", path.display()))?;
    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", root.display());
    }
    Ok(root)
}

/// Resolve a configured ignore-file path against the report root.
pub fn resolve_ignore_file(root: &Path, ignore_file: PathBuf) -> PathBuf {
    if ignore_file.is_absolute() {
        ignore_file
    } else {
        root.join(ignore_file)
    }
}

/// Write the report to a file, or print it when no destination is given.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, content)
                .with_context(|| format!("Failed writing report to {}", path.display()))?;
        }
        None => println!("{}", content),
    }
    Ok(())
}
