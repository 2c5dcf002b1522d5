//! Filesystem persistence for uploaded item images.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Stores uploaded images on the local filesystem.
///
/// Files are written under their original client-supplied name: no
/// sanitization and no collision suffix, so concurrent uploads with the same
/// name overwrite each other. The upload directory is injected configuration,
/// shared with everything else that writes to it.
#[derive(Debug, Clone)]
pub struct ImageStore {
    directory: PathBuf,
}

impl ImageStore {
    /// Create a store rooted at the given upload directory.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Compute the stored path for a filename without writing anything.
    pub fn stored_path(&self, file_name: &str) -> PathBuf {
        self.directory.join(file_name)
    }

    /// Persist file bytes under the original filename and return the path
    /// recorded on the item document.
    pub async fn save(&self, file_name: &str, data: &[u8]) -> std::io::Result<String> {
        fs::create_dir_all(&self.directory).await?;

        let path = self.stored_path(file_name);
        fs::write(&path, data).await?;

        debug!(path = %path.display(), "stored uploaded image");
        Ok(path.to_string_lossy().into_owned())
    }
}
