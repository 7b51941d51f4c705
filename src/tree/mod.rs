//! Directory tree generation.

use crate::filter::IgnoreRules;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Render the directory hierarchy under `root` as text.
///
/// Entries matched by the ignore rules are omitted and not descended into.
/// Directories sort before files; each group sorts by name.
pub fn generate_tree(root: &Path, ignore_file: Option<&Path>) -> Result<String> {
    let rules = IgnoreRules::load(root, ignore_file)?;
    let root_name = root.file_name().and_then(|n| n.to_str()).unwrap_or(".");
    let mut lines = vec![format!("{}/", root_name)];
    walk_tree(root, root, "", &rules, &mut lines)?;
    Ok(lines.join("\n"))
}

fn walk_tree(
    root: &Path,
    current: &Path,
    prefix: &str,
    rules: &IgnoreRules,
    lines: &mut Vec<String>,
) -> Result<()> {
    let mut entries: Vec<(bool, String, PathBuf)> = fs::read_dir(current)
        .with_context(|| format!("failed to read directory: {}", current.display()))?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let file_type = entry.file_type().ok()?;
            let name = entry.file_name().to_string_lossy().to_string();
            let path = entry.path();
            let relative = path.strip_prefix(root).ok()?.to_path_buf();

            if rules.is_ignored(&relative, file_type.is_dir()) {
                return None;
            }

            Some((file_type.is_dir(), name, path))
        })
        .collect();

    entries.sort_by(|a, b| {
        let dir_cmp = b.0.cmp(&a.0);
        if dir_cmp == std::cmp::Ordering::Equal {
            a.1.cmp(&b.1)
        } else {
            dir_cmp
        }
    });

    let total_entries = entries.len();
    for (idx, (is_dir, name, path)) in entries.into_iter().enumerate() {
        let is_last = idx == total_entries - 1;
        let connector = if is_last { "└── " } else { "├── " };

        if is_dir {
            lines.push(format!("{}{}{}/", prefix, connector, name));
            let extension = if is_last { "    " } else { "│   " };
            walk_tree(root, &path, &format!("{}{}", prefix, extension), rules, lines)?;
        } else {
            lines.push(format!("{}{}{}", prefix, connector, name));
        }
    }

    Ok(())
}
