//! AssetFile entity - one candidate image from the assets directory

use std::path::{Path, PathBuf};

use crate::domain::value_objects::normalize_name;

/// An image discovered in the asset source.
///
/// Lives for one run only; after placement nothing but the copied bytes remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    /// Full source path
    path: PathBuf,
    /// File name without extension
    filename: String,
    /// Comparison key derived from `filename`
    normalized_name: String,
}

impl AssetFile {
    /// Build an asset from its path; the stem becomes the filename.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let normalized_name = normalize_name(&filename);
        Self {
            path,
            filename,
            normalized_name,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn normalized_name(&self) -> &str {
        &self.normalized_name
    }

    /// File name including extension, as shown in progress output
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.filename.clone())
    }
}
