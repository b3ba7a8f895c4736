//! AssetSource port - abstraction for discovering assets
//!
//! The ingest flow asks for the candidate images of a directory without
//! knowing how they are found.

use std::path::Path;

use crate::domain::entities::AssetFile;
use crate::error::IngestResult;

/// Abstract source of image assets
pub trait AssetSource {
    /// All candidate assets in `dir`, in a stable order.
    ///
    /// Fails with `IngestError::AssetDirNotFound` when `dir` is missing.
    fn scan(&self, dir: &Path) -> IngestResult<Vec<AssetFile>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_source_trait_is_object_safe() {
        fn _assert_object_safe(_: &dyn AssetSource) {}
    }
}
