//! Slot Allocator Domain Service
//!
//! Hands the slots nobody matched to the assets nobody matched. Lower ids go
//! first: low tiers hold the generic placeholder slots.

use std::collections::BTreeSet;

/// Result of an allocation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationOutcome<T> {
    /// `(item, slot id)` pairs in item order
    pub allocated: Vec<(T, u32)>,
    /// Items left over once the free slots ran out
    pub unresolved: Vec<T>,
}

impl<T> Default for AllocationOutcome<T> {
    fn default() -> Self {
        Self {
            allocated: Vec::new(),
            unresolved: Vec::new(),
        }
    }
}

/// Slot allocator service
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotAllocator;

impl SlotAllocator {
    pub fn new() -> Self {
        Self
    }

    /// Pair pending items with free ids, lowest id first.
    ///
    /// Items keep their encounter order; duplicate ids count once.
    pub fn allocate<T>(
        &self,
        pending: impl IntoIterator<Item = T>,
        free_ids: impl IntoIterator<Item = u32>,
    ) -> AllocationOutcome<T> {
        let mut free = free_ids.into_iter().collect::<BTreeSet<u32>>().into_iter();
        let mut outcome = AllocationOutcome::default();

        for item in pending {
            match free.next() {
                Some(id) => outcome.allocated.push((item, id)),
                None => outcome.unresolved.push(item),
            }
        }

        outcome
    }
}
