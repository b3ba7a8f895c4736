//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod ledger_diff;
pub mod ledger_parser;
mod ledger_writer;
mod name_matcher;
mod slot_allocator;

pub use ledger_diff::{ChangedLine, LedgerDiff, LineChange};
pub use ledger_parser::{parse_entry_line, parse_tier_header, EntryLine, LedgerParser};
pub use ledger_writer::{
    parse_summary_line, AllocationRewrite, LedgerWriter, DEFAULT_DECLARED_TOTAL,
    DEFAULT_PLACEHOLDER_DESCRIPTION, SUMMARY_LINE_INDEX,
};
pub use name_matcher::{CandidatePool, NameMatch, NameMatcher};
pub use slot_allocator::{AllocationOutcome, SlotAllocator};
