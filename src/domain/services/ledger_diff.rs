//! Ledger Diff Domain Service
//!
//! Line-level comparison of the ledger before and after a run, used by
//! `--diff` previews and dry runs.

use similar::{ChangeTag, TextDiff};

use crate::domain::entities::LedgerDocument;

/// Kind of change on a ledger line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    Removed,
    Added,
    Unchanged,
}

impl From<ChangeTag> for LineChange {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Delete => LineChange::Removed,
            ChangeTag::Insert => LineChange::Added,
            ChangeTag::Equal => LineChange::Unchanged,
        }
    }
}

/// A changed ledger line with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedLine {
    pub change: LineChange,
    pub line_number: usize,
    pub content: String,
}

/// Difference between two versions of the ledger
#[derive(Debug, Clone, Default)]
pub struct LedgerDiff {
    changed: Vec<ChangedLine>,
    unified: String,
}

impl LedgerDiff {
    /// Compare two ledger versions; `label` names the file in the unified header.
    pub fn between(before: &LedgerDocument, after: &LedgerDocument, label: &str) -> Self {
        let old = before.to_text();
        let new = after.to_text();
        let diff = TextDiff::from_lines(&old, &new);

        let changed = diff
            .iter_all_changes()
            .filter(|c| c.tag() != ChangeTag::Equal)
            .map(|c| ChangedLine {
                change: c.tag().into(),
                line_number: c.old_index().or(c.new_index()).map_or(0, |i| i + 1),
                content: c.value().trim_end_matches(['\r', '\n']).to_string(),
            })
            .collect();

        let unified = diff
            .unified_diff()
            .context_radius(1)
            .header(&format!("a/{label}"), &format!("b/{label}"))
            .to_string();

        Self { changed, unified }
    }

    pub fn has_changes(&self) -> bool {
        !self.changed.is_empty()
    }

    pub fn changed_lines(&self) -> &[ChangedLine] {
        &self.changed
    }

    /// `+added, -removed` summary
    pub fn summary(&self) -> String {
        let added = self
            .changed
            .iter()
            .filter(|l| l.change == LineChange::Added)
            .count();
        let removed = self.changed.len() - added;
        format!("+{}, -{}", added, removed)
    }

    /// Unified diff text (empty when nothing changed)
    pub fn unified(&self) -> &str {
        &self.unified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_ledgers_have_no_changes() {
        let doc = LedgerDocument::from_text("a\nb\n");
        let diff = LedgerDiff::between(&doc, &doc, "ledger.txt");
        assert!(!diff.has_changes());
        assert_eq!(diff.summary(), "+0, -0");
    }

    #[test]
    fn checkbox_flip_is_one_line_replacement() {
        let before = LedgerDocument::from_text("x\ny\n1. [ ] **Orb**\n");
        let after = LedgerDocument::from_text("x\ny\n1. [x] **Orb**\n");
        let diff = LedgerDiff::between(&before, &after, "ledger.txt");

        assert_eq!(diff.summary(), "+1, -1");
        let removed = &diff.changed_lines()[0];
        assert_eq!(removed.change, LineChange::Removed);
        assert_eq!(removed.line_number, 3);
        assert_eq!(removed.content, "1. [ ] **Orb**");
    }

    #[test]
    fn unified_output_has_headers() {
        let before = LedgerDocument::from_text("a\n");
        let after = LedgerDocument::from_text("b\n");
        let diff = LedgerDiff::between(&before, &after, "ledger.txt");

        assert!(diff.unified().contains("--- a/ledger.txt"));
        assert!(diff.unified().contains("+++ b/ledger.txt"));
        assert!(diff.unified().contains("-a"));
        assert!(diff.unified().contains("+b"));
    }
}
