//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{IngestOptions, IngestUseCase, StatusUseCase};
use crate::config::Config;
use crate::error::IngestResult;
use crate::infrastructure::{LocalFs, PngAssetSource, TextLedgerRepository};

/// Type alias for the concrete IngestUseCase with all dependencies
pub type ConcreteIngestUseCase = IngestUseCase<TextLedgerRepository, PngAssetSource, LocalFs>;

/// Type alias for the concrete StatusUseCase
pub type ConcreteStatusUseCase = StatusUseCase<TextLedgerRepository>;

/// Create an ingest use case backed by the local file system
pub fn create_ingest_use_case() -> ConcreteIngestUseCase {
    IngestUseCase::new(
        TextLedgerRepository::new(),
        PngAssetSource::new(),
        LocalFs::new(),
    )
}

/// Create a status use case backed by the local file system
pub fn create_status_use_case() -> ConcreteStatusUseCase {
    StatusUseCase::new(TextLedgerRepository::new())
}

/// Build run options from resolved configuration.
///
/// Relative paths are resolved against `base`.
pub fn ingest_options_from_config(config: &Config, base: &Path) -> IngestResult<IngestOptions> {
    Ok(IngestOptions::new(
        base.join(&config.paths.assets),
        base.join(&config.paths.icons),
        base.join(&config.paths.ledger),
    )
    .with_policy(config.match_policy()?)
    .with_declared_total(config.ledger.declared_total)
    .with_placeholder_description(config.ledger.placeholder_description.clone())
    .with_include_complete(config.allocation.include_complete))
}
