//! LedgerRepository port - abstraction for ledger persistence
//!
//! The domain sees the ledger as a `LedgerDocument`; where and how it is
//! stored (and locked) is up to the infrastructure layer.

use std::path::{Path, PathBuf};

use crate::domain::entities::LedgerDocument;
use crate::error::IngestError;

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger operation errors
#[derive(Debug)]
pub enum LedgerError {
    /// Ledger file does not exist
    NotFound(PathBuf),
    /// Another run holds the lock
    Locked(PathBuf),
    /// I/O error (includes non-UTF-8 ledger content)
    Io(std::io::Error),
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::NotFound(path) => write!(f, "Ledger not found: {}", path.display()),
            LedgerError::Locked(path) => write!(f, "Ledger is locked: {}", path.display()),
            LedgerError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for LedgerError {}

impl From<LedgerError> for IngestError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound(path) => IngestError::LedgerNotFound { path },
            LedgerError::Locked(path) => IngestError::LedgerLocked { path },
            LedgerError::Io(io) => IngestError::Io(io),
        }
    }
}

/// Abstract repository for the progress ledger
pub trait LedgerRepository {
    /// Held for the duration of a run; released on drop
    type Guard;

    /// Load the ledger text
    fn load(&self, path: &Path) -> LedgerResult<LedgerDocument>;

    /// Persist the full ledger text
    fn save(&self, ledger: &LedgerDocument, path: &Path) -> LedgerResult<()>;

    /// Take the exclusive run lock for this ledger
    fn lock(&self, path: &Path) -> LedgerResult<Self::Guard>;
}
