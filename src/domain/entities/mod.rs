//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `SlotRecord` - A numbered icon slot parsed from the ledger
//! - `AssetFile` - An image waiting to be placed
//! - `LedgerDocument` / `SlotTable` - The ledger as text and as records

mod asset_file;
mod ledger;
mod slot_record;

pub use asset_file::AssetFile;
pub use ledger::{LedgerDocument, LineEnding, SlotTable};
pub use slot_record::SlotRecord;
