//! `icon-ingest status`

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;

use icon_ingest::presentation::{create_renderer, create_status_use_case, OutputFormat};

use super::{load_config, GlobalArgs};

pub fn cmd_status(ledger: Option<PathBuf>, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let ledger = ledger.unwrap_or(config.paths.ledger);

    let report = create_status_use_case()
        .execute(&ledger, config.ledger.declared_total)
        .with_context(|| format!("reading {} failed", ledger.display()))?;

    let is_tty = io::stdout().is_terminal();
    let format = if global.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let renderer = create_renderer(format, global.color.enabled(is_tty), is_tty);
    let mut out = io::stdout().lock();
    renderer.render_status(&mut out, &report)?;
    out.flush()?;

    Ok(())
}
