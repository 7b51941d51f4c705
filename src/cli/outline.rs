//! Outline command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{resolve_root, write_output};
use crate::outline::get_report;

#[derive(Args)]
pub struct OutlineArgs {
    /// Folder to outline
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Gitignore-style file with paths to exclude
    #[arg(short = 'I', long, value_name = "FILE")]
    pub ignore_file: Option<PathBuf>,

    /// Write the outline to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: OutlineArgs) -> Result<()> {
    let root = resolve_root(&args.path)?;
    let outline = get_report(&root, args.ignore_file.as_deref())?;
    write_output(args.output.as_deref(), &outline)
}
