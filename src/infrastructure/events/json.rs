//! JSON Event Sink
//!
//! Outputs ingest events as NDJSON for CI/automation consumption.

use crate::domain::ports::{IngestEvent, IngestEventSink};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn path_str(path: &Path) -> String {
    path.display().to_string()
}

/// JSON form of an event; every object carries `event` and `command`
pub fn event_to_json(event: &IngestEvent) -> serde_json::Value {
    match event {
        IngestEvent::Started {
            assets_dir,
            ledger,
            dry_run,
        } => serde_json::json!({
            "event": "start",
            "command": "ingest",
            "assets_dir": path_str(assets_dir),
            "ledger": path_str(ledger),
            "dry_run": dry_run,
        }),

        IngestEvent::LedgerParsed {
            slot_count,
            complete_count,
        } => serde_json::json!({
            "event": "ledger_parsed",
            "command": "ingest",
            "slot_count": slot_count,
            "complete_count": complete_count,
        }),

        IngestEvent::AssetsScanned { asset_count } => serde_json::json!({
            "event": "assets_scanned",
            "command": "ingest",
            "asset_count": asset_count,
        }),

        IngestEvent::Matched {
            asset,
            slot_id,
            slot_name,
            score,
            destination,
            unchanged,
        } => serde_json::json!({
            "event": "matched",
            "command": "ingest",
            "asset": asset,
            "slot_id": slot_id,
            "slot_name": slot_name,
            "score": score,
            "destination": path_str(destination),
            "unchanged": unchanged,
        }),

        IngestEvent::PassCompleted {
            matched,
            unmatched,
            free_slots,
        } => serde_json::json!({
            "event": "pass_completed",
            "command": "ingest",
            "matched": matched,
            "unmatched": unmatched,
            "free_slots": free_slots,
        }),

        IngestEvent::Allocated {
            asset,
            slot_id,
            previous_name,
            new_name,
            destination,
            unchanged,
        } => serde_json::json!({
            "event": "allocated",
            "command": "ingest",
            "asset": asset,
            "slot_id": slot_id,
            "previous_name": previous_name,
            "new_name": new_name,
            "destination": path_str(destination),
            "unchanged": unchanged,
        }),

        IngestEvent::Unresolved { asset } => serde_json::json!({
            "event": "unresolved",
            "command": "ingest",
            "asset": asset,
        }),

        IngestEvent::LedgerWritten {
            path,
            complete_count,
            dry_run,
        } => serde_json::json!({
            "event": "ledger_written",
            "command": "ingest",
            "path": path_str(path),
            "complete_count": complete_count,
            "dry_run": dry_run,
        }),

        IngestEvent::Completed {
            matched,
            allocated,
            unresolved,
        } => {
            let status = if *unresolved == 0 {
                "success"
            } else {
                "partial"
            };
            serde_json::json!({
                "event": "complete",
                "command": "ingest",
                "status": status,
                "matched": matched,
                "allocated": allocated,
                "unresolved": unresolved,
                "processed": matched + allocated,
            })
        }
    }
}

impl IngestEventSink for JsonEventSink {
    fn on_event(&self, event: IngestEvent) {
        self.write_event(event_to_json(&event));
    }
}
