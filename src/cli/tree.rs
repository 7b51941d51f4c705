//! Tree command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{resolve_root, write_output};
use crate::tree::generate_tree;

#[derive(Args)]
pub struct TreeArgs {
    /// Folder to render
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Gitignore-style file with paths to exclude
    #[arg(short = 'I', long, value_name = "FILE")]
    pub ignore_file: Option<PathBuf>,

    /// Write the tree to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: TreeArgs) -> Result<()> {
    let root = resolve_root(&args.path)?;
    let tree = generate_tree(&root, args.ignore_file.as_deref())?;
    write_output(args.output.as_deref(), &tree)
}
