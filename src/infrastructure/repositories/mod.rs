//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod asset;
mod ledger;

pub use asset::{is_png, PngAssetSource};
pub use ledger::{lock_path, LedgerLock, TextLedgerRepository};
