//! PNG Asset Source
//!
//! Finds candidate icons in the assets directory: regular files directly
//! inside it whose extension is `.png` in any case.

use std::path::Path;

use crate::domain::entities::AssetFile;
use crate::domain::ports::{AssetSource, FileSystem};
use crate::error::{IngestError, IngestResult};
use crate::infrastructure::fs::LocalFs;

const ASSET_EXTENSION: &str = "png";

/// Asset source that scans a directory for PNG files
pub struct PngAssetSource<F: FileSystem = LocalFs> {
    fs: F,
}

impl PngAssetSource<LocalFs> {
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for PngAssetSource<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> PngAssetSource<F> {
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }
}

/// Whether a path names a PNG file (extension compared case-insensitively)
pub fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(ASSET_EXTENSION))
        .unwrap_or(false)
}

impl<F: FileSystem> AssetSource for PngAssetSource<F> {
    fn scan(&self, dir: &Path) -> IngestResult<Vec<AssetFile>> {
        if !self.fs.is_dir(dir) {
            return Err(IngestError::AssetDirNotFound {
                path: dir.to_path_buf(),
            });
        }

        let assets = self
            .fs
            .list_files(dir)?
            .into_iter()
            .filter(|p| is_png(p))
            .map(AssetFile::from_path)
            .collect();

        Ok(assets)
    }
}
