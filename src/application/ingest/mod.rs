//! Ingest Module
//!
//! Orchestrates an ingest run.
//!
//! ## Structure
//!
//! - `options` - Run configuration (`IngestOptions`)
//! - `result` - Result types (`IngestReport`)
//! - `use_case` - Core use case logic (`IngestUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use icon_ingest::application::ingest::{IngestOptions, IngestUseCase};
//!
//! let use_case = IngestUseCase::new(ledger_repo, asset_source, fs);
//! let report = use_case.execute(&IngestOptions::new("assets", "public/icons", "ledger.txt"))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::IngestOptions;
pub use result::{AllocatedAsset, IngestReport, MatchedAsset};
pub use use_case::IngestUseCase;
