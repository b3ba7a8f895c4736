//! Ingest Event Port
//!
//! Provides an observable interface for ingest runs.
//! Enables progress output, JSON event streams, and testing.

use std::path::PathBuf;

/// Event emitted during an ingest run
#[derive(Debug, Clone, PartialEq)]
pub enum IngestEvent {
    /// Run started
    Started {
        assets_dir: PathBuf,
        ledger: PathBuf,
        dry_run: bool,
    },

    /// Ledger parsed into slot records
    LedgerParsed {
        slot_count: usize,
        complete_count: usize,
    },

    /// Asset directory scanned
    AssetsScanned { asset_count: usize },

    /// Asset matched a slot name and was placed
    Matched {
        asset: String,
        slot_id: u32,
        slot_name: String,
        score: f64,
        destination: PathBuf,
        unchanged: bool,
    },

    /// Exact-match pass finished
    PassCompleted {
        matched: usize,
        unmatched: usize,
        free_slots: usize,
    },

    /// Unmatched asset took over a free slot
    Allocated {
        asset: String,
        slot_id: u32,
        previous_name: String,
        new_name: String,
        destination: PathBuf,
        unchanged: bool,
    },

    /// No slot left for an asset
    Unresolved { asset: String },

    /// Ledger persisted (or would have been, in a dry run)
    LedgerWritten {
        path: PathBuf,
        complete_count: Option<usize>,
        dry_run: bool,
    },

    /// Run completed
    Completed {
        matched: usize,
        allocated: usize,
        unresolved: usize,
    },
}

/// Trait for receiving ingest events
///
/// Implementations:
/// - ConsoleEventSink: human-readable progress lines
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: silent operation
pub trait IngestEventSink: Send + Sync {
    /// Handle an ingest event
    fn on_event(&self, event: IngestEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl IngestEventSink for NoopEventSink {
    fn on_event(&self, _event: IngestEvent) {}
}
