//! Command handlers for the binary

pub mod error;
pub mod ingest;
pub mod status;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use icon_ingest::config::{self, Config};
use icon_ingest::presentation::ColorWhen;

/// Flags shared by every subcommand
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub json: bool,
    pub verbose: u8,
    pub color: ColorWhen,
    pub config: Option<PathBuf>,
}

/// Resolve configuration and report unknown keys on stderr
pub fn load_config(global: &GlobalArgs) -> Result<Config> {
    let (config, warnings) = config::load_or_default(global.config.as_deref(), Path::new("."))
        .context("failed to load configuration")?;

    for warning in &warnings {
        eprintln!("[WARN] {}", warning);
    }

    Ok(config)
}
