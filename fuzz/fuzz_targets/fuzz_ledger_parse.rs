#![no_main]

use icon_ingest::domain::services::{LedgerParser, LedgerWriter};
use icon_ingest::LedgerDocument;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Parsing and rewriting every slot should never panic
        let mut doc = LedgerDocument::from_text(text);
        let table = LedgerParser::new().parse(&doc);
        let writer = LedgerWriter::new(150, "Fuzzed.");
        for record in table.records() {
            writer.mark_complete(&mut doc, record);
            writer.apply_allocation(&mut doc, record, "fuzzed_asset");
        }
        writer.update_summary(&mut doc);
        let _ = doc.to_text();
    }
});
