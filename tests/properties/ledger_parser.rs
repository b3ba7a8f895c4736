//! Property tests for ledger parsing and in-place edits.

use proptest::prelude::*;

use icon_ingest::domain::entities::LedgerDocument;
use icon_ingest::domain::services::{parse_entry_line, LedgerParser, LedgerWriter};

fn slot_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][a-z]{1,8}( [A-Z][a-z]{1,8}){0,2}").unwrap()
}

/// `(tier, [(name, complete)])` sections rendered as ledger text with ids from 1
fn generated_ledger() -> impl Strategy<Value = (String, Vec<(u32, u8, String, bool)>)> {
    let section = (
        1u8..=10,
        proptest::collection::vec((slot_name(), any::<bool>()), 0..5),
    );
    proptest::collection::vec(section, 0..4).prop_map(|sections| {
        let mut text = String::from("# Remaining Icons\n\n**Total Status**: 0/150 Complete\n");
        let mut expected = Vec::new();
        let mut id = 1;
        for (tier, entries) in sections {
            text.push_str(&format!("\n## Tier {}: Some Items\n", tier));
            for (name, complete) in entries {
                let mark = if complete { 'x' } else { ' ' };
                text.push_str(&format!("{}. [{}] **{}**\n", id, mark, name));
                text.push_str("Description line.\n");
                expected.push((id, tier, name, complete));
                id += 1;
            }
        }
        (text, expected)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: text with any mix of LF, CRLF and stray CR survives a load/save cycle byte for byte.
    #[test]
    fn property_document_text_round_trips(text in "[a-z \\[\\]*.0-9\r\n]{0,200}") {
        prop_assert_eq!(LedgerDocument::from_text(&text).to_text(), text);
    }

    /// PROPERTY: parsing arbitrary text never panics and every record points at its own entry line.
    #[test]
    fn property_records_point_at_their_entry_lines(text in "\\PC{0,300}") {
        let doc = LedgerDocument::from_text(&text);
        let table = LedgerParser::new().parse(&doc);

        for record in table.records() {
            let line = doc.line(record.position()).unwrap();
            let entry = parse_entry_line(line).unwrap();
            prop_assert_eq!(entry.id, record.id());
            prop_assert_eq!(entry.name, record.name());
            if let Some(desc) = record.description_position() {
                prop_assert_eq!(desc, record.position() + 1);
            }
        }
    }

    /// PROPERTY: generated ledgers parse to exactly the generated slots.
    #[test]
    fn property_generated_ledger_parses_back((text, expected) in generated_ledger()) {
        let table = LedgerParser::new().parse(&LedgerDocument::from_text(&text));

        prop_assert_eq!(table.len(), expected.len());
        for (id, tier, name, complete) in &expected {
            let record = table.get(*id).unwrap();
            prop_assert_eq!(record.name(), name.as_str());
            prop_assert_eq!(record.tier().number(), *tier);
            prop_assert_eq!(record.is_complete(), *complete);
            prop_assert_eq!(record.description_position(), Some(record.position() + 1));
        }
    }

    /// PROPERTY: marking a slot complete changes only its checkbox.
    #[test]
    fn property_mark_complete_edits_one_char((text, expected) in generated_ledger()) {
        prop_assume!(!expected.is_empty());
        let original = LedgerDocument::from_text(&text);
        let table = LedgerParser::new().parse(&original);
        let writer = LedgerWriter::new(150, "Placeholder.");

        for record in table.records() {
            let mut doc = original.clone();
            writer.mark_complete(&mut doc, record);

            let changed: Vec<usize> = (0..doc.len())
                .filter(|i| doc.line(*i) != original.line(*i))
                .collect();
            if record.is_complete() {
                prop_assert!(changed.is_empty());
            } else {
                prop_assert_eq!(changed, vec![record.position()]);
                let line = doc.line(record.position()).unwrap();
                prop_assert!(parse_entry_line(line).unwrap().is_complete);
            }
        }
    }
}
