//! Local filesystem storage for uploaded media.

use std::path::{Path, PathBuf};
use url::Url;

/// Writes files under a media root and builds their public URLs.
#[derive(Clone, Debug)]
pub struct MediaStorage {
    root: PathBuf,
    /// Absolute URL the media root is served at, ending with `/`.
    base_url: Url,
}

impl MediaStorage {
    /// # Arguments
    /// - `root` - Directory files are written to
    /// - `base_url` - Absolute URL `root` is served at
    pub fn new(root: impl Into<PathBuf>, base_url: Url) -> Self {
        Self {
            root: root.into(),
            base_url,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Public URL of a file stored at `relative_path`.
    ///
    /// # Returns
    /// - `Ok(String)` - Absolute URL
    /// - `Err(url::ParseError)` - `relative_path` is not a valid URL path
    pub fn url_for(&self, relative_path: &str) -> Result<String, url::ParseError> {
        Ok(self.base_url.join(relative_path)?.to_string())
    }

    /// Writes `data` to `relative_path` under the media root, creating parent directories.
    ///
    /// # Returns
    /// - `Ok(())` - File written
    /// - `Err(std::io::Error)` - Directory creation or write failed
    pub async fn save(&self, relative_path: &str, data: &[u8]) -> Result<(), std::io::Error> {
        let path = self.root.join(relative_path);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&path, data).await
    }
}
