//! Text Ledger Repository
//!
//! Implements the LedgerRepository port for the plain-text ledger file.
//! A run holds an advisory lock on `<ledger>.lock` next to the ledger.

use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::entities::LedgerDocument;
use crate::domain::ports::file_system::{FileSystem, FsError};
use crate::domain::ports::ledger_repository::{LedgerError, LedgerRepository, LedgerResult};
use crate::infrastructure::fs::LocalFs;

/// Plain-text ledger repository
pub struct TextLedgerRepository<F: FileSystem = LocalFs> {
    fs: F,
}

impl TextLedgerRepository<LocalFs> {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for TextLedgerRepository<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> TextLedgerRepository<F> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }
}

/// Path of the lock file guarding `ledger`
pub fn lock_path(ledger: &Path) -> PathBuf {
    let mut name = ledger
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".lock");
    ledger.with_file_name(name)
}

/// Exclusive lock on a ledger, released when dropped
#[derive(Debug)]
pub struct LedgerLock {
    file: fs::File,
    path: PathBuf,
}

impl LedgerLock {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for LedgerLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

fn map_fs_error(path: &Path, err: FsError) -> LedgerError {
    match err {
        FsError::NotFound(_) => LedgerError::NotFound(path.to_path_buf()),
        FsError::Io(io) => LedgerError::Io(io),
        other => LedgerError::Io(std::io::Error::other(other.to_string())),
    }
}

impl<F: FileSystem> LedgerRepository for TextLedgerRepository<F> {
    type Guard = LedgerLock;

    fn load(&self, path: &Path) -> LedgerResult<LedgerDocument> {
        if !self.fs.exists(path) {
            return Err(LedgerError::NotFound(path.to_path_buf()));
        }
        let text = self.fs.read(path).map_err(|e| map_fs_error(path, e))?;
        Ok(LedgerDocument::from_text(&text))
    }

    fn save(&self, ledger: &LedgerDocument, path: &Path) -> LedgerResult<()> {
        self.fs
            .write(path, &ledger.to_text())
            .map_err(|e| map_fs_error(path, e))
    }

    fn lock(&self, path: &Path) -> LedgerResult<LedgerLock> {
        if !self.fs.exists(path) {
            return Err(LedgerError::NotFound(path.to_path_buf()));
        }
        let lock_path = lock_path(path);
        let file = fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(LedgerError::Io)?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(LedgerLock {
                file,
                path: lock_path,
            }),
            Err(e) if e.raw_os_error() == fs2::lock_contended_error().raw_os_error() => {
                Err(LedgerError::Locked(path.to_path_buf()))
            }
            Err(e) => Err(LedgerError::Io(e)),
        }
    }
}
