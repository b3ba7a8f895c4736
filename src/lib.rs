//! icon-ingest - reconcile icon assets with a tiered progress ledger
//!
//! Incoming `.png` files are matched by name against the numbered slots of a
//! plain-text ledger, copied into per-tier folders as `icon_<id>.png`, and the
//! ledger is rewritten to record what was filled. Assets with no matching
//! slot take over the lowest free slots.
//!
//! ## Layers
//!
//! - `domain` - entities, value objects, pure services and ports
//! - `application` - ingest and status use cases
//! - `infrastructure` - local file system, ledger repository, event sinks
//! - `presentation` - CLI definition, factories and renderers
//! - `config` - layered TOML configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{IngestOptions, IngestReport, IngestUseCase, StatusReport, StatusUseCase};
pub use config::Config;
pub use domain::entities::{AssetFile, LedgerDocument, SlotRecord, SlotTable};
pub use domain::policies::{MatchPolicy, TieBreak};
pub use domain::value_objects::Tier;
pub use error::{IngestError, IngestResult};
