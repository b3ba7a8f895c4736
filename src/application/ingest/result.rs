//! Ingest Result
//!
//! Result types for ingest runs.

use std::path::PathBuf;

use crate::domain::services::LedgerDiff;

/// An asset placed into the slot whose name it matched
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedAsset {
    pub asset: String,
    pub slot_id: u32,
    pub slot_name: String,
    pub score: f64,
    pub destination: PathBuf,
    /// Destination already held identical bytes
    pub unchanged: bool,
}

/// An unmatched asset that took over a free slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatedAsset {
    pub asset: String,
    pub slot_id: u32,
    pub previous_name: String,
    pub new_name: String,
    pub destination: PathBuf,
    pub unchanged: bool,
    pub description_rewritten: bool,
}

/// Result of an ingest run
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub matched: Vec<MatchedAsset>,
    pub allocated: Vec<AllocatedAsset>,
    /// Assets left over once the free slots ran out
    pub unresolved: Vec<String>,
    pub slot_count: usize,
    pub asset_count: usize,
    /// Completed entries written to the summary line; `None` when the
    /// ledger has no summary line
    pub complete_count: Option<usize>,
    pub declared_total: u32,
    pub dry_run: bool,
    pub ledger_diff: LedgerDiff,
}

impl IngestReport {
    /// Assets placed by either pass
    pub fn processed(&self) -> usize {
        self.matched.len() + self.allocated.len()
    }

    /// Every asset found a slot
    pub fn is_success(&self) -> bool {
        self.unresolved.is_empty()
    }

    pub fn has_changes(&self) -> bool {
        self.ledger_diff.has_changes()
            || self.matched.iter().any(|m| !m.unchanged)
            || self.allocated.iter().any(|a| !a.unchanged)
    }
}
