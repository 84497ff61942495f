use std::path::{Path, PathBuf};

use crate::error::AssetError;

/// The optional WOPR video attached to scenario responses
#[derive(Debug, Clone)]
pub struct VideoAsset {
    path: PathBuf,
}

impl VideoAsset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Checked on every use so the file can be added or removed while the bot runs
    pub fn available(&self) -> Result<&Path, AssetError> {
        if self.path.is_file() {
            Ok(&self.path)
        } else {
            Err(AssetError::Missing(self.path.clone()))
        }
    }
}
