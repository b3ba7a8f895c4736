//! Console Event Sink
//!
//! Human-readable progress lines for interactive runs.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::{Color, Stylize};

use crate::config::Verbosity;
use crate::domain::ports::{IngestEvent, IngestEventSink};

/// Event sink that prints progress messages
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbosity: Verbosity,
    color: bool,
}

impl ConsoleEventSink {
    pub fn stdout(verbosity: Verbosity, color: bool) -> Self {
        Self::with_writer(io::stdout(), verbosity, color)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        verbosity: Verbosity,
        color: bool,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbosity,
            color,
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            format!("{}", text.with(color))
        } else {
            text.to_string()
        }
    }

    /// Message for an event at the sink's verbosity, if any
    fn message(&self, event: &IngestEvent) -> Option<String> {
        let verbose = self.verbosity == Verbosity::Verbose;
        let quiet = self.verbosity == Verbosity::Quiet;

        match event {
            IngestEvent::Started {
                assets_dir,
                dry_run,
                ..
            } if !quiet => {
                let mut line = format!("Starting ingestion from {}...", assets_dir.display());
                if *dry_run {
                    line.push(' ');
                    line.push_str(&self.paint("(dry run)", Color::Yellow));
                }
                Some(line)
            }
            IngestEvent::LedgerParsed {
                slot_count,
                complete_count,
            } if !quiet => {
                let mut line = format!("Found {} tracked icons.", slot_count);
                if verbose {
                    line.push_str(&format!(" ({} already complete)", complete_count));
                }
                Some(line)
            }
            IngestEvent::AssetsScanned { asset_count } if !quiet => {
                Some(format!("Found {} asset files.", asset_count))
            }
            IngestEvent::Matched {
                asset,
                slot_id,
                slot_name,
                score,
                unchanged,
                ..
            } if verbose => {
                let mut line = format!(
                    "  {} '{}' -> Slot {} ({}) [{:.2}]",
                    self.paint("match", Color::Green),
                    asset,
                    slot_id,
                    slot_name,
                    score
                );
                if *unchanged {
                    line.push_str(" unchanged");
                }
                Some(line)
            }
            IngestEvent::PassCompleted {
                matched,
                unmatched,
                free_slots,
            } if !quiet => Some(format!(
                "Exact matches: {}. Unmatched assets: {}. Unused slots: {}.",
                matched, unmatched, free_slots
            )),
            IngestEvent::Allocated {
                asset,
                slot_id,
                previous_name,
                unchanged,
                ..
            } if !quiet => {
                let mut line = format!(
                    "Overwriting Slot {} ({}) with '{}'",
                    slot_id, previous_name, asset
                );
                if verbose && *unchanged {
                    line.push_str(" (unchanged)");
                }
                Some(line)
            }
            IngestEvent::Unresolved { asset } => Some(format!(
                "{} No slots left for {}",
                self.paint("CRITICAL:", Color::Red),
                asset
            )),
            IngestEvent::LedgerWritten {
                path,
                complete_count,
                dry_run,
            } if verbose => {
                let action = if *dry_run { "Would update" } else { "Updated" };
                let count = complete_count
                    .map(|c| format!(" ({} complete)", c))
                    .unwrap_or_else(|| " (no summary line)".to_string());
                Some(format!("{} {}{}", action, path.display(), count))
            }
            _ => None,
        }
    }
}

impl IngestEventSink for ConsoleEventSink {
    fn on_event(&self, event: IngestEvent) {
        let Some(line) = self.message(&event) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}
