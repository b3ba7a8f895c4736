//! Status Use Case
//!
//! Read-only view of the ledger: completion per tier and whether the stored
//! summary line agrees with the entries.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::ports::LedgerRepository;
use crate::domain::services::{parse_summary_line, LedgerParser, LedgerWriter, SUMMARY_LINE_INDEX};
use crate::domain::value_objects::Tier;
use crate::error::IngestResult;

/// Completion of one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierStatus {
    pub tier: Tier,
    pub total: usize,
    pub complete: usize,
}

/// Ledger status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub ledger_path: PathBuf,
    /// Tiers that own at least one slot, ascending
    pub tiers: Vec<TierStatus>,
    pub slot_count: usize,
    /// Entry lines whose checkbox holds `x`
    pub complete_count: usize,
    /// `(completed, total)` as currently written in the summary line
    pub stated: Option<(usize, usize)>,
    pub declared_total: u32,
}

impl StatusReport {
    /// The summary line exists and reports the real completed count
    pub fn summary_in_sync(&self) -> bool {
        self.stated
            .map(|(completed, _)| completed == self.complete_count)
            .unwrap_or(false)
    }
}

/// Status use case
pub struct StatusUseCase<LR: LedgerRepository> {
    ledger_repo: LR,
}

impl<LR: LedgerRepository> StatusUseCase<LR> {
    pub fn new(ledger_repo: LR) -> Self {
        Self { ledger_repo }
    }

    pub fn execute(&self, ledger_path: &Path, declared_total: u32) -> IngestResult<StatusReport> {
        let ledger = self.ledger_repo.load(ledger_path)?;
        let table = LedgerParser::new().parse(&ledger);

        let mut per_tier: BTreeMap<Tier, TierStatus> = BTreeMap::new();
        for record in table.records() {
            let status = per_tier.entry(record.tier()).or_insert(TierStatus {
                tier: record.tier(),
                total: 0,
                complete: 0,
            });
            status.total += 1;
            if record.is_complete() {
                status.complete += 1;
            }
        }

        Ok(StatusReport {
            ledger_path: ledger_path.to_path_buf(),
            tiers: per_tier.into_values().collect(),
            slot_count: table.len(),
            complete_count: LedgerWriter::complete_count(&ledger),
            stated: ledger.line(SUMMARY_LINE_INDEX).and_then(parse_summary_line),
            declared_total,
        })
    }
}
