//! Python code outline reporting.
//!
//! Walks the folder for Python files (honoring the shared ignore rules),
//! outlines each one, and joins the per-file sections into a single report.

use crate::filter::IgnoreRules;
use crate::utils::paths::relative_display;
use crate::utils::read_file_safe;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

pub mod python;

/// Outline report for every Python file under `root`.
///
/// Files are ordered by relative path; sections are separated by one blank
/// line. Parsing runs in parallel but the output keeps path order. No
/// Python files yields an empty string.
pub fn get_report(root: &Path, ignore_file: Option<&Path>) -> Result<String> {
    let rules = IgnoreRules::load(root, ignore_file)?;

    let mut files: Vec<(PathBuf, String)> = Vec::new();
    collect_python_files(root, root, &rules, &mut files)?;
    files.sort_by(|a, b| a.1.cmp(&b.1));

    let sections = files
        .par_iter()
        .map(|(path, relative)| -> Result<String> {
            let source = read_file_safe(path)?;
            Ok(python::outline_file(relative, &source))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(sections.join("\n\n"))
}

fn collect_python_files(
    root: &Path,
    current: &Path,
    rules: &IgnoreRules,
    files: &mut Vec<(PathBuf, String)>,
) -> Result<()> {
    let entries = fs::read_dir(current)
        .with_context(|| format!("failed to read directory: {}", current.display()))?;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(_) => continue,
        };
        let path = entry.path();
        let relative = match path.strip_prefix(root) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => continue,
        };

        if rules.is_ignored(&relative, file_type.is_dir()) {
            continue;
        }

        if file_type.is_dir() {
            collect_python_files(root, &path, rules, files)?;
        } else if path.extension().is_some_and(|ext| ext == "py") {
            if let Some(display) = relative_display(root, &path) {
                files.push((path, display));
            }
        }
    }

    Ok(())
}
