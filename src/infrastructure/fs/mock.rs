//! In-memory file system for tests
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared between the
//! use case under test and the assertions.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::ContentHash;

#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: Arc<Mutex<BTreeMap<PathBuf, Vec<u8>>>>,
    pub dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file (and its parent directories)
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl AsRef<[u8]>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files
            .lock()
            .unwrap()
            .insert(path, content.as_ref().to_vec());
    }

    pub fn add_dir(&self, path: &Path) {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    pub fn bytes(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn text(&self, path: &Path) -> Option<String> {
        self.bytes(path)
            .map(|b| String::from_utf8_lossy(&b).into_owned())
    }
}

impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.text(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.add_file(path, content);
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<u64> {
        let bytes = self
            .bytes(from)
            .ok_or_else(|| FsError::NotFound(from.to_path_buf()))?;
        if let Some(parent) = to.parent() {
            if !self.is_dir(parent) {
                return Err(FsError::NotFound(parent.to_path_buf()));
            }
        }
        let len = bytes.len() as u64;
        self.files.lock().unwrap().insert(to.to_path_buf(), bytes);
        Ok(len)
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.add_dir(path);
        Ok(())
    }

    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        if !self.is_dir(dir) {
            return Err(FsError::NotFound(dir.to_path_buf()));
        }
        Ok(self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        self.bytes(path)
            .map(|b| ContentHash::from_bytes(&b))
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }
}
