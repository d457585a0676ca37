use async_trait::async_trait;

/// Failure writing an object to a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("S3 error: {0}")]
    S3(String),
}

/// Storage backend for uploaded images.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `data` under `name` and return the URL clients fetch it from.
    async fn put(&self, name: &str, data: &[u8], content_type: &str)
        -> Result<String, StorageError>;

    /// Short backend identifier for logs and health output.
    fn backend(&self) -> &'static str;
}
