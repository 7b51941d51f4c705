//! Report command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{resolve_ignore_file, resolve_root, write_output};
use crate::config::load_config;
use crate::report::folder_report;

#[derive(Args)]
pub struct ReportArgs {
    /// Folder to report on
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Gitignore-style file with paths to exclude
    #[arg(short = 'I', long, value_name = "FILE")]
    pub ignore_file: Option<PathBuf>,

    /// Path to config file (folder-report.toml or .folder-report.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: ReportArgs) -> Result<()> {
    let root = resolve_root(&args.path)?;
    let config = load_config(&root, args.config.as_deref())?;

    // CLI flags win over config file values.
    let ignore_file = args
        .ignore_file
        .or_else(|| config.ignore_file.map(|path| resolve_ignore_file(&root, path)));
    let output = args.output.or(config.output);

    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    let report = runtime.block_on(folder_report(&root, ignore_file.as_deref()))?;

    write_output(output.as_deref(), &report)
}
