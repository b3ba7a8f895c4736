//! Error types for icon-ingest
//!
//! Library code returns `IngestResult`; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ingest operations
pub type IngestResult<T> = Result<T, IngestError>;

/// Main error type for ingest operations
#[derive(Error, Debug)]
pub enum IngestError {
    /// Asset source directory is missing (fatal, nothing has been mutated yet)
    #[error("assets directory not found: {path}")]
    AssetDirNotFound { path: PathBuf },

    /// Ledger file is missing
    #[error("ledger not found: {path}")]
    LedgerNotFound { path: PathBuf },

    /// Another run holds the ledger lock
    #[error("ledger '{path}' is locked by another run")]
    LedgerLocked { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Similarity threshold outside 0..=1
    #[error("similarity threshold {value} is outside 0.0..=1.0")]
    InvalidThreshold { value: f64 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
