//! Ledger Writer Domain Service
//!
//! Applies run results to the ledger text buffer: checkbox flips, name and
//! description rewrites for allocated slots, and the summary line.
//! Edits never add or remove lines, so record positions stay valid.

use crate::domain::entities::{LedgerDocument, SlotRecord};
use crate::domain::services::ledger_parser::parse_entry_line;
use crate::domain::value_objects::title_from_filename;

/// Description written under a slot taken over by an unmatched asset
pub const DEFAULT_PLACEHOLDER_DESCRIPTION: &str = "Auto-ingested asset. Replacing placeholder.";

/// Total printed in the summary line, independent of the parsed entry count
pub const DEFAULT_DECLARED_TOTAL: u32 = 150;

/// Index of the summary line (third line of the ledger)
pub const SUMMARY_LINE_INDEX: usize = 2;

/// What an allocation rewrite changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationRewrite {
    /// New display name written into the entry
    pub title: String,
    /// Whether the paired description line was overwritten
    pub description_rewritten: bool,
}

/// Ledger writer service
#[derive(Debug, Clone)]
pub struct LedgerWriter {
    declared_total: u32,
    placeholder_description: String,
}

impl Default for LedgerWriter {
    fn default() -> Self {
        Self::new(DEFAULT_DECLARED_TOTAL, DEFAULT_PLACEHOLDER_DESCRIPTION)
    }
}

impl LedgerWriter {
    pub fn new(declared_total: u32, placeholder_description: impl Into<String>) -> Self {
        Self {
            declared_total,
            placeholder_description: placeholder_description.into(),
        }
    }

    pub fn declared_total(&self) -> u32 {
        self.declared_total
    }

    /// Force the record's checkbox to `x`. Returns true if the line changed.
    pub fn mark_complete(&self, doc: &mut LedgerDocument, record: &SlotRecord) -> bool {
        let Some(line) = doc.line(record.position()) else {
            return false;
        };
        let Some(entry) = parse_entry_line(line) else {
            return false;
        };
        if entry.is_complete {
            return false;
        }

        let offset = entry.checkbox_offset;
        let mut updated = line.to_string();
        updated.replace_range(offset..offset + 1, "x");
        doc.replace_line(record.position(), updated)
    }

    /// Rewrite an allocated slot: checkbox, name from the asset filename and
    /// the paired description line (skipped when there is none).
    pub fn apply_allocation(
        &self,
        doc: &mut LedgerDocument,
        record: &SlotRecord,
        asset_filename: &str,
    ) -> AllocationRewrite {
        let title = title_from_filename(asset_filename);
        self.mark_complete(doc, record);

        let renamed = doc
            .line(record.position())
            .and_then(|line| {
                let entry = parse_entry_line(line)?;
                let mut updated = line.to_string();
                updated.replace_range(entry.name_range, &title);
                Some(updated)
            });
        if let Some(updated) = renamed {
            doc.replace_line(record.position(), updated);
        }

        let description_rewritten = record
            .description_position()
            .map(|pos| doc.replace_line(pos, self.placeholder_description.as_str()))
            .unwrap_or(false);

        AllocationRewrite {
            title,
            description_rewritten,
        }
    }

    /// Entry lines whose checkbox holds `x`
    pub fn complete_count(doc: &LedgerDocument) -> usize {
        doc.lines()
            .iter()
            .filter_map(|line| parse_entry_line(line))
            .filter(|entry| entry.is_complete)
            .count()
    }

    /// Summary line text for a completed count
    pub fn summary_line(&self, completed: usize) -> String {
        format!(
            "**Total Status**: {}/{} Complete",
            completed, self.declared_total
        )
    }

    /// Recount completions and overwrite the summary line.
    ///
    /// Returns the count, or `None` when the ledger is too short to hold a
    /// summary line.
    pub fn update_summary(&self, doc: &mut LedgerDocument) -> Option<usize> {
        if doc.len() <= SUMMARY_LINE_INDEX {
            return None;
        }
        let completed = Self::complete_count(doc);
        doc.replace_line(SUMMARY_LINE_INDEX, self.summary_line(completed));
        Some(completed)
    }
}

/// Parse a summary line into `(completed, total)`
pub fn parse_summary_line(line: &str) -> Option<(usize, usize)> {
    let rest = line.trim().strip_prefix("**Total Status**:")?;
    let rest = rest.trim().strip_suffix("Complete")?.trim();
    let (completed, total) = rest.split_once('/')?;
    Some((completed.trim().parse().ok()?, total.trim().parse().ok()?))
}
