//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod asset_source;
pub mod file_system;
pub mod ingest_events;
pub mod ledger_repository;

pub use asset_source::AssetSource;
pub use file_system::{FileSystem, FsError, FsResult};
pub use ingest_events::{IngestEvent, IngestEventSink, NoopEventSink};
pub use ledger_repository::{LedgerError, LedgerRepository, LedgerResult};
