//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::ContentHash;

/// Local file system implementation
///
/// Writes go through a temp file in the target directory and are renamed
/// into place, so a crash never leaves a half-written ledger. An existing
/// file keeps its permissions, and a symlinked path keeps pointing at the
/// rewritten file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        // Replace the file a symlink points at, not the link itself
        let existing = match std::fs::canonicalize(path) {
            Ok(target) => {
                let metadata = std::fs::metadata(&target).map_err(|e| FsError::at(&target, e))?;
                Some((target, metadata.permissions()))
            }
            Err(_) => None,
        };
        let target = existing
            .as_ref()
            .map_or_else(|| path.to_path_buf(), |(target, _)| target.clone());

        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent).map_err(|e| FsError::at(&parent, e))?;

        let mut tmp = tempfile::NamedTempFile::new_in(&parent).map_err(|e| FsError::at(&parent, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| FsError::at(path, e))?;
        if let Some((_, permissions)) = existing {
            tmp.as_file()
                .set_permissions(permissions)
                .map_err(|e| FsError::at(path, e))?;
        }
        tmp.persist(&target)
            .map_err(|e| FsError::at(path, e.error))?;
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<u64> {
        std::fs::copy(from, to).map_err(|e| FsError::at(from, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| FsError::at(dir, e))? {
            let path = entry.map_err(|e| FsError::at(dir, e))?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        let bytes = std::fs::read(path).map_err(|e| FsError::at(path, e))?;
        Ok(ContentHash::from_bytes(&bytes))
    }
}
