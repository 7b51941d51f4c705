//! folder-report: render a folder as a directory tree plus a Python code outline
//!
//! This tool walks a folder, draws its directory hierarchy as text, outlines
//! the structure of every Python file it contains, and prints both as one
//! combined report.

use anyhow::Result;

fn main() -> Result<()> {
    folder_report::cli::run()
}
