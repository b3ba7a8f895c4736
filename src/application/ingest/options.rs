//! Ingest Options
//!
//! Configuration types for ingest runs.

use std::path::PathBuf;

use crate::domain::policies::MatchPolicy;
use crate::domain::services::{LedgerWriter, DEFAULT_DECLARED_TOTAL, DEFAULT_PLACEHOLDER_DESCRIPTION};

/// Options for the ingest use case
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Directory scanned for `.png` assets
    pub assets_dir: PathBuf,
    /// Root of the tier folders
    pub icons_dir: PathBuf,
    /// Progress ledger file
    pub ledger_path: PathBuf,
    /// Threshold and tie-break for the exact-match pass
    pub policy: MatchPolicy,
    /// Total printed in the summary line
    pub declared_total: u32,
    /// Description written under reassigned slots
    pub placeholder_description: String,
    /// Whether completed slots may be reassigned
    pub include_complete: bool,
    /// Plan only: copy nothing, write nothing
    pub dry_run: bool,
}

impl IngestOptions {
    pub fn new(
        assets_dir: impl Into<PathBuf>,
        icons_dir: impl Into<PathBuf>,
        ledger_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            icons_dir: icons_dir.into(),
            ledger_path: ledger_path.into(),
            policy: MatchPolicy::default(),
            declared_total: DEFAULT_DECLARED_TOTAL,
            placeholder_description: DEFAULT_PLACEHOLDER_DESCRIPTION.to_string(),
            include_complete: true,
            dry_run: false,
        }
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_declared_total(mut self, total: u32) -> Self {
        self.declared_total = total;
        self
    }

    pub fn with_placeholder_description(mut self, description: impl Into<String>) -> Self {
        self.placeholder_description = description.into();
        self
    }

    pub fn with_include_complete(mut self, include: bool) -> Self {
        self.include_complete = include;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Ledger writer configured from these options
    pub fn ledger_writer(&self) -> LedgerWriter {
        LedgerWriter::new(self.declared_total, self.placeholder_description.clone())
    }
}
