//! Ledger entities
//!
//! `LedgerDocument` is the text buffer the ledger persists as; `SlotTable` is
//! the logical model parsed from it. The two are only reconciled when the
//! document is parsed and when it is written back.

use std::collections::BTreeMap;

use super::SlotRecord;

/// Line terminator used by the ledger file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    /// Last line of a file without a trailing newline
    Missing,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Missing => "",
        }
    }

    /// Split a raw line (as yielded by `split_inclusive('\n')`) into content and terminator
    fn split(raw: &str) -> (&str, LineEnding) {
        if let Some(content) = raw.strip_suffix("\r\n") {
            (content, LineEnding::CrLf)
        } else if let Some(content) = raw.strip_suffix('\n') {
            (content, LineEnding::Lf)
        } else {
            (raw, LineEnding::Missing)
        }
    }
}

/// The ledger as an ordered sequence of lines.
///
/// Each line keeps its own terminator, so files with mixed endings are
/// written back byte for byte apart from the lines that were replaced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LedgerDocument {
    lines: Vec<String>,
    endings: Vec<LineEnding>,
}

impl LedgerDocument {
    /// Split ledger text into lines, remembering how each one ended.
    pub fn from_text(text: &str) -> Self {
        let (lines, endings) = text
            .split_inclusive('\n')
            .map(|raw| {
                let (content, ending) = LineEnding::split(raw);
                (content.to_string(), ending)
            })
            .unzip();
        Self { lines, endings }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Terminator of the line at `index`
    pub fn line_ending(&self, index: usize) -> Option<LineEnding> {
        self.endings.get(index).copied()
    }

    /// Replace the content of the line at `index`; its terminator is kept.
    /// Returns false when the index is out of range.
    pub fn replace_line(&mut self, index: usize, content: impl Into<String>) -> bool {
        match self.lines.get_mut(index) {
            Some(line) => {
                *line = content.into();
                true
            }
            None => false,
        }
    }

    /// Serialize the full document.
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .zip(&self.endings)
            .map(|(line, ending)| format!("{}{}", line, ending.as_str()))
            .collect()
    }
}

/// Slot records keyed by id, plus the normalized-name lookup used for matching
#[derive(Debug, Clone, Default)]
pub struct SlotTable {
    records: BTreeMap<u32, SlotRecord>,
    name_index: BTreeMap<String, u32>,
    entry_lines: usize,
}

impl SlotTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parsed record. A repeated id replaces the earlier record.
    pub fn insert(&mut self, record: SlotRecord) {
        self.entry_lines += 1;
        self.records.insert(record.id(), record);
    }

    /// Rebuild the name lookup; later ids win on normalized-name collisions.
    pub fn rebuild_name_index(&mut self) {
        self.name_index = self
            .records
            .values()
            .map(|r| (r.normalized_name(), r.id()))
            .collect();
    }

    pub fn get(&self, id: u32) -> Option<&SlotRecord> {
        self.records.get(&id)
    }

    /// Records in ascending id order
    pub fn records(&self) -> impl Iterator<Item = &SlotRecord> {
        self.records.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.records.keys().copied()
    }

    pub fn name_index(&self) -> &BTreeMap<String, u32> {
        &self.name_index
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of lines that matched the entry pattern (repeated ids included)
    pub fn entry_line_count(&self) -> usize {
        self.entry_lines
    }

    pub fn complete_count(&self) -> usize {
        self.records.values().filter(|r| r.is_complete()).count()
    }
}
