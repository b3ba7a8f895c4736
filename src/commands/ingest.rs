//! `icon-ingest ingest`

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;

use icon_ingest::domain::ports::IngestEventSink;
use icon_ingest::infrastructure::{ConsoleEventSink, JsonEventSink};
use icon_ingest::presentation::{
    create_ingest_use_case, create_renderer, ingest_options_from_config, OutputFormat,
};

use super::{load_config, GlobalArgs};

/// Flags of the ingest subcommand
#[derive(Debug, Clone, Default)]
pub struct IngestArgs {
    pub assets: Option<PathBuf>,
    pub icons: Option<PathBuf>,
    pub ledger: Option<PathBuf>,
    pub threshold: Option<f64>,
    pub dry_run: bool,
    pub diff: bool,
}

pub fn cmd_ingest(args: IngestArgs, global: &GlobalArgs) -> Result<()> {
    let mut config = load_config(global)?;

    if let Some(assets) = args.assets {
        config.paths.assets = assets;
    }
    if let Some(icons) = args.icons {
        config.paths.icons = icons;
    }
    if let Some(ledger) = args.ledger {
        config.paths.ledger = ledger;
    }
    if let Some(threshold) = args.threshold {
        config.matching.threshold = threshold;
    }

    let options = ingest_options_from_config(&config, Path::new(""))?.with_dry_run(args.dry_run);

    let is_tty = io::stdout().is_terminal();
    let color = global.color.enabled(is_tty);
    let verbosity = config.output.verbosity.raised(global.verbose);

    let events: Arc<dyn IngestEventSink> = if global.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(verbosity, color))
    };

    let report = create_ingest_use_case()
        .execute_with_events(&options, events)
        .with_context(|| format!("ingest into {} failed", options.ledger_path.display()))?;

    let format = if global.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let renderer = create_renderer(format, color, is_tty);
    let mut out = io::stdout().lock();
    renderer.render_ingest(&mut out, &report, args.diff)?;
    out.flush()?;

    Ok(())
}
