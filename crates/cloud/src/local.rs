//! Local filesystem backend.

use std::path::PathBuf;

use async_trait::async_trait;
use closet_core::upload::local_url;
use tokio::fs;

use crate::store::{ObjectStore, StorageError};

/// Writes images into a directory that the API serves under `/uploads`.
///
/// The directory is created on first write if it does not exist.
pub struct LocalDiskStore {
    base_path: PathBuf,
}

impl LocalDiskStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for LocalDiskStore {
    async fn put(
        &self,
        name: &str,
        data: &[u8],
        _content_type: &str,
    ) -> Result<String, StorageError> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            tracing::warn!(dir = %self.base_path.display(), error = %e, "local_store: create_dir_all failed");
            e
        })?;

        let full_path = self.base_path.join(name);
        fs::write(&full_path, data).await.map_err(|e| {
            tracing::warn!(path = %full_path.display(), error = %e, "local_store: write failed");
            e
        })?;

        tracing::debug!(path = %full_path.display(), size = data.len(), "local_store: wrote file");
        Ok(local_url(name))
    }

    fn backend(&self) -> &'static str {
        "local"
    }
}
