//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `IngestUseCase` - Scan, match, allocate, place and rewrite the ledger
//! - `StatusUseCase` - Per-tier completion and summary-line check

pub mod ingest;
pub mod status;

pub use ingest::{AllocatedAsset, IngestOptions, IngestReport, IngestUseCase, MatchedAsset};
pub use status::{StatusReport, StatusUseCase, TierStatus};
