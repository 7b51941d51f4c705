//! Folder report composition.

use crate::outline;
use crate::tree;
use anyhow::Result;
use std::path::Path;

/// Combined report for a folder: the directory tree, one blank line, then
/// the Python code outline.
///
/// Both generators receive the same root and ignore file; their errors
/// propagate unchanged. Async so a hosting scheduler can interleave calls —
/// the composition itself never suspends.
pub async fn folder_report(root: &Path, ignore_file: Option<&Path>) -> Result<String> {
    let folder_tree = tree::generate_tree(root, ignore_file)?;
    let report = outline::get_report(root, ignore_file)?;

    Ok(format!("{}\n\n{}", folder_tree, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixture_root(tmp: &TempDir) -> PathBuf {
        let root = tmp.path().join("project");
        fs::create_dir(&root).expect("mkdir project");
        root
    }

    #[tokio::test]
    async fn report_is_tree_then_blank_line_then_outline() {
        let tmp = TempDir::new().expect("tmp");
        let root = fixture_root(&tmp);
        fs::create_dir(root.join("src")).expect("mkdir src");
        fs::write(root.join("src/main.py"), "def main():\n    pass\n").expect("write main");
        fs::write(root.join("README.md"), "# Demo\n").expect("write readme");

        let report = folder_report(&root, None).await.expect("report");

        let folder_tree = tree::generate_tree(&root, None).expect("tree");
        let code_outline = outline::get_report(&root, None).expect("outline");
        similar_asserts::assert_eq!(report, format!("{}\n\n{}", folder_tree, code_outline));
    }

    #[tokio::test]
    async fn separator_is_exactly_one_blank_line() {
        let tmp = TempDir::new().expect("tmp");
        let root = fixture_root(&tmp);
        fs::write(root.join("a.py"), "x = 1\n").expect("write a");

        let report = folder_report(&root, None).await.expect("report");

        // tree ends without a newline, outline starts without one
        assert!(report.contains("└── a.py\n\na.py:"));
        assert!(!report.contains("\n\n\n"));
    }

    #[tokio::test]
    async fn empty_outline_leaves_trailing_separator() {
        let tmp = TempDir::new().expect("tmp");
        let root = fixture_root(&tmp);

        let report = folder_report(&root, None).await.expect("report");
        assert_eq!(report, "project/\n\n");
    }

    #[tokio::test]
    async fn ignore_file_reaches_both_generators() {
        let tmp = TempDir::new().expect("tmp");
        let root = fixture_root(&tmp);
        fs::create_dir(root.join("skipme")).expect("mkdir skipme");
        fs::write(root.join("skipme/mod.py"), "def hidden():\n    pass\n").expect("write mod");
        fs::write(root.join("keep.py"), "def shown():\n    pass\n").expect("write keep");

        let ignore_path = tmp.path().join("rules");
        fs::write(&ignore_path, "skipme/\n").expect("write rules");

        let report = folder_report(&root, Some(&ignore_path)).await.expect("report");
        assert!(!report.contains("skipme"));
        assert!(!report.contains("hidden"));
        assert!(report.contains("keep.py"));
        assert!(report.contains("- def shown() (line 1)"));
    }

    #[tokio::test]
    async fn collaborator_errors_propagate_unchanged() {
        let tmp = TempDir::new().expect("tmp");
        let root = fixture_root(&tmp);
        let missing = tmp.path().join("no-such-ignore");

        let err = folder_report(&root, Some(&missing)).await.unwrap_err();
        assert!(err.to_string().contains("ignore file not found"));

        let gone = tmp.path().join("no-such-root");
        let err = folder_report(&gone, None).await.unwrap_err();
        assert!(err.to_string().contains("failed to read directory"));
    }
}
