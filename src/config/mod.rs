//! Configuration loading
//!
//! Handles loading report settings from a config file in the target folder,
//! with CLI arguments taking precedence over file values.

pub mod loader;

pub use loader::load_config;

use serde::Deserialize;
use std::path::PathBuf;

/// File-backed settings for the report commands.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ignore file consulted by both generators; relative paths resolve
    /// against the folder being reported on.
    pub ignore_file: Option<PathBuf>,

    /// Write the report here instead of stdout.
    pub output: Option<PathBuf>,
}
