//! Property tests for slot allocation.

use std::collections::BTreeSet;

use proptest::prelude::*;

use icon_ingest::domain::services::SlotAllocator;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: allocation takes the lowest free ids, each once, in item order.
    #[test]
    fn property_allocation_uses_lowest_free_ids(
        items in proptest::collection::vec("[a-z]{1,8}", 0..20),
        free in proptest::collection::vec(1u32..200, 0..20),
    ) {
        let outcome = SlotAllocator::new().allocate(items.clone(), free.clone());

        let unique: Vec<u32> = free.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        let expected_count = items.len().min(unique.len());

        prop_assert_eq!(outcome.allocated.len(), expected_count);
        prop_assert_eq!(outcome.unresolved.len(), items.len() - expected_count);

        let ids: Vec<u32> = outcome.allocated.iter().map(|(_, id)| *id).collect();
        prop_assert_eq!(&ids[..], &unique[..expected_count]);

        let order: Vec<String> = outcome
            .allocated
            .iter()
            .map(|(item, _)| item.clone())
            .chain(outcome.unresolved.iter().cloned())
            .collect();
        prop_assert_eq!(order, items);
    }
}
