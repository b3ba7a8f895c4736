//! Ledger Parser Domain Service
//!
//! Turns ledger text into slot records. Recognized lines:
//!
//! ```text
//! ## Tier 3: Rare Items            <- tier header ("Tier" + "Items" + "Tier N:")
//! 12. [ ] **Storm Lantern**         <- entry line
//! A lantern that hums in storms.    <- paired description line
//! ```
//!
//! Entry ids are `u32`; a line whose id does not fit is not an entry.
//! Everything else is ignored without warning.

use std::ops::Range;

use crate::domain::entities::{LedgerDocument, SlotRecord, SlotTable};
use crate::domain::value_objects::Tier;

const NAME_DELIMITER: &str = "**";

/// A line matching `<id>. [ |x] **<name>**`, with the byte spans the writer edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLine<'a> {
    pub id: u32,
    pub is_complete: bool,
    pub name: &'a str,
    /// Byte offset of the checkbox mark (the char between `[` and `]`)
    pub checkbox_offset: usize,
    /// Byte range of the name between the `**` delimiters
    pub name_range: Range<usize>,
}

/// Parse an entry line; `None` when the line does not match the entry pattern.
pub fn parse_entry_line(line: &str) -> Option<EntryLine<'_>> {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits_end == 0 {
        return None;
    }
    let id: u32 = line[..digits_end].parse().ok()?;

    let rest = line[digits_end..].strip_prefix('.')?;
    let rest = strip_required_whitespace(rest)?;
    let after_open = rest.strip_prefix('[')?;
    let is_complete = match after_open.chars().next()? {
        ' ' => false,
        'x' => true,
        _ => return None,
    };
    let checkbox_offset = line.len() - after_open.len();

    let rest = after_open[1..].strip_prefix(']')?;
    let rest = strip_required_whitespace(rest)?;
    let name_part = rest.strip_prefix(NAME_DELIMITER)?;

    // Shortest non-empty name followed by the closing delimiter
    let first_len = name_part.chars().next()?.len_utf8();
    let close = name_part[first_len..].find(NAME_DELIMITER)? + first_len;
    let name_start = line.len() - name_part.len();

    Some(EntryLine {
        id,
        is_complete,
        name: &name_part[..close],
        checkbox_offset,
        name_range: name_start..name_start + close,
    })
}

fn strip_required_whitespace(s: &str) -> Option<&str> {
    let trimmed = s.trim_start();
    (trimmed.len() < s.len()).then_some(trimmed)
}

/// Tier announced by a section header line, if the line is one.
pub fn parse_tier_header(line: &str) -> Option<Tier> {
    if !is_tier_header(line) {
        return None;
    }
    Tier::all().find(|tier| line.contains(&tier.header_marker()))
}

/// Header lines mention both "Tier" and "Items".
pub fn is_tier_header(line: &str) -> bool {
    line.contains("Tier") && line.contains("Items")
}

/// Whether `line` can serve as the description paired with the entry above it.
fn is_description_line(line: &str) -> bool {
    !line.trim().is_empty() && !is_tier_header(line) && parse_entry_line(line).is_none()
}

/// Ledger parser service
#[derive(Debug, Clone, Copy, Default)]
pub struct LedgerParser;

impl LedgerParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse every entry of the document into a slot table.
    pub fn parse(&self, doc: &LedgerDocument) -> SlotTable {
        let mut table = SlotTable::new();
        let mut current_tier = Tier::COMMON;

        for (position, line) in doc.lines().iter().enumerate() {
            if let Some(tier) = parse_tier_header(line) {
                current_tier = tier;
            }

            let Some(entry) = parse_entry_line(line) else {
                continue;
            };

            let description_position = doc
                .line(position + 1)
                .filter(|next| is_description_line(next))
                .map(|_| position + 1);

            table.insert(
                SlotRecord::new(entry.id, entry.name, current_tier, position)
                    .with_complete(entry.is_complete)
                    .with_description_position(description_position),
            );
        }

        table.rebuild_name_index();
        table
    }
}
