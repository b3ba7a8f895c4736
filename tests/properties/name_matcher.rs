//! Property tests for name normalization and matching.

use proptest::prelude::*;

use icon_ingest::domain::policies::{MatchPolicy, TieBreak};
use icon_ingest::domain::services::NameMatcher;
use icon_ingest::domain::value_objects::normalize_name;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: normalizing twice gives the same key as normalizing once.
    #[test]
    fn property_normalize_is_idempotent(name in "[A-Za-z _\\-\t]{0,40}") {
        let once = normalize_name(&name);
        prop_assert_eq!(normalize_name(&once), once.clone());
        prop_assert!(!once.starts_with(' ') && !once.ends_with(' '));
        prop_assert!(!once.contains("  "));
    }

    /// PROPERTY: separators and case never prevent an exact match.
    #[test]
    fn property_filename_spelling_matches_slot_name(words in proptest::collection::vec("[a-z]{1,8}", 1..4)) {
        let slot = words
            .iter()
            .map(|w| format!("{}{}", w[..1].to_uppercase(), &w[1..]))
            .collect::<Vec<_>>()
            .join(" ");
        let filename = words.join("_");
        let slot_key = normalize_name(&slot);

        let matcher = NameMatcher::new(MatchPolicy::new(1.0, TieBreak::LowestId).unwrap());
        let found = matcher.best_match(&normalize_name(&filename), [(slot_key.as_str(), 7)]);

        prop_assert_eq!(found.map(|m| m.id), Some(7));
    }

    /// PROPERTY: a match is only ever reported at or above the threshold.
    #[test]
    fn property_reported_score_meets_threshold(
        asset in "[a-z ]{1,12}",
        names in proptest::collection::vec("[a-z ]{1,12}", 1..6),
        threshold in 0.0f64..=1.0,
    ) {
        let matcher = NameMatcher::new(MatchPolicy::new(threshold, TieBreak::LowestId).unwrap());
        let candidates = names.iter().enumerate().map(|(i, n)| (n.as_str(), i as u32 + 1));

        if let Some(found) = matcher.best_match(&asset, candidates) {
            prop_assert!(found.score >= threshold);
            prop_assert!(found.id >= 1 && found.id as usize <= names.len());
        }
    }
}
