use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

const APP_DIR: &str = "marquee";

/// Trait for persistent blob storage operations
///
/// This abstraction allows easy mocking of local persistence in tests.
/// Each key names a single opaque value; callers own the encoding.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Loads the blob stored under `key`, or None when nothing is stored
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Saves `data` under `key`, replacing any previous value
    async fn save(&self, key: &str, data: &[u8]) -> Result<()>;

    /// Removes the blob stored under `key`; a missing key is not an error
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Blob storage backed by files under the platform data directory
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    /// Creates a blob store under the platform data directory
    pub fn new() -> Result<Self> {
        let dir = dirs::data_dir()
            .context("Could not determine data directory")?
            .join(APP_DIR);
        Ok(Self::with_dir(dir))
    }

    /// Creates a blob store rooted at a specific directory
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let data = std::fs::read(&path).context("Failed to read blob file")?;
        Ok(Some(data))
    }

    async fn save(&self, key: &str, data: &[u8]) -> Result<()> {
        std::fs::create_dir_all(&self.dir).context("Failed to create data directory")?;
        std::fs::write(self.path_for(key), data).context("Failed to write blob file")?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            std::fs::remove_file(&path).context("Failed to delete blob file")?;
        }
        Ok(())
    }
}
