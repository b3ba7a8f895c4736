//! SlotRecord entity - one numbered icon slot in the ledger

use crate::domain::value_objects::{normalize_name, Tier};

/// A numbered, tier-classified ledger entry.
///
/// Records are built once per run by the parser and never mutated; the
/// ledger writer applies changes to the text buffer at `position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRecord {
    /// Slot id (the leading number of the entry line)
    id: u32,
    /// Display name between the `**` markers
    name: String,
    /// Whether the checkbox holds `x`
    is_complete: bool,
    /// Tier from the nearest preceding header
    tier: Tier,
    /// Index of the entry line in the ledger
    position: usize,
    /// Index of the paired description line, if the pairing holds
    description_position: Option<usize>,
}

impl SlotRecord {
    pub fn new(id: u32, name: impl Into<String>, tier: Tier, position: usize) -> Self {
        Self {
            id,
            name: name.into(),
            is_complete: false,
            tier,
            position,
            description_position: None,
        }
    }

    pub fn with_complete(mut self, is_complete: bool) -> Self {
        self.is_complete = is_complete;
        self
    }

    pub fn with_description_position(mut self, position: Option<usize>) -> Self {
        self.description_position = position;
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name used for matching (never persisted)
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn description_position(&self) -> Option<usize> {
        self.description_position
    }
}
