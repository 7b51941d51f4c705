//! Shared exclusion rules for the tree and outline generators.
//!
//! Both generators must observe the same rules for the same inputs, so the
//! optional ignore file is loaded once here and passed to each walk as a
//! compiled matcher. Patterns use gitignore syntax, including negation.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the ignore file consulted when none is given explicitly.
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

#[derive(Debug, Error)]
pub enum IgnoreError {
    #[error("ignore file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to load ignore file {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },
}

/// Compiled exclusion rules rooted at the folder being reported on.
#[derive(Debug)]
pub struct IgnoreRules {
    matcher: Option<Gitignore>,
}

impl IgnoreRules {
    /// Load rules for `root`.
    ///
    /// An explicitly given ignore file must exist. Without one, `.gitignore`
    /// in the root is used when present, otherwise nothing is excluded.
    pub fn load(root: &Path, ignore_file: Option<&Path>) -> Result<Self, IgnoreError> {
        let ignore_file = match ignore_file {
            Some(path) => {
                if !path.is_file() {
                    return Err(IgnoreError::NotFound { path: path.to_path_buf() });
                }
                Some(path.to_path_buf())
            }
            None => {
                let default = root.join(DEFAULT_IGNORE_FILE);
                if default.is_file() {
                    Some(default)
                } else {
                    None
                }
            }
        };

        let matcher = match ignore_file {
            Some(path) => {
                let mut builder = GitignoreBuilder::new(root);
                if let Some(source) = builder.add(&path) {
                    return Err(IgnoreError::Invalid { path, source });
                }
                let gitignore = builder
                    .build()
                    .map_err(|source| IgnoreError::Invalid { path, source })?;
                Some(gitignore)
            }
            None => None,
        };

        Ok(Self { matcher })
    }

    /// Whether a path (relative to the root) is excluded.
    ///
    /// The `.git` directory is always excluded, rules or not.
    pub fn is_ignored(&self, relative_path: &Path, is_dir: bool) -> bool {
        if is_dir && relative_path.file_name().is_some_and(|name| name == ".git") {
            return true;
        }

        match &self.matcher {
            Some(matcher) => matcher.matched(relative_path, is_dir).is_ignore(),
            None => false,
        }
    }
}
