use std::path::PathBuf;
use std::sync::Arc;

use crate::local::LocalDiskStore;
use crate::s3::S3Store;
use crate::store::ObjectStore;

/// Region used when `AWS_REGION` is not set.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Image storage configuration loaded from environment variables.
///
/// | Env Var                 | Default     |
/// |-------------------------|-------------|
/// | `AWS_ACCESS_KEY_ID`     | unset       |
/// | `AWS_SECRET_ACCESS_KEY` | unset       |
/// | `AWS_REGION`            | `us-east-1` |
/// | `AWS_S3_BUCKET`         | unset       |
///
/// Empty values count as unset.
#[derive(Debug, Clone, Default)]
pub struct StorageConfig {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub region: String,
    pub bucket: Option<String>,
}

/// Complete S3 settings; only produced when every piece is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Settings {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub bucket: String,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            access_key_id: non_empty("AWS_ACCESS_KEY_ID"),
            secret_access_key: non_empty("AWS_SECRET_ACCESS_KEY"),
            region: non_empty("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            bucket: non_empty("AWS_S3_BUCKET"),
        }
    }

    /// S3 settings if access key, secret key and bucket are all present.
    pub fn s3_settings(&self) -> Option<S3Settings> {
        match (&self.access_key_id, &self.secret_access_key, &self.bucket) {
            (Some(access_key_id), Some(secret_access_key), Some(bucket)) => Some(S3Settings {
                access_key_id: access_key_id.clone(),
                secret_access_key: secret_access_key.clone(),
                region: self.region.clone(),
                bucket: bucket.clone(),
            }),
            _ => None,
        }
    }

    /// True if some but not all S3 settings are present.
    pub fn is_partial(&self) -> bool {
        let set = [
            self.access_key_id.is_some(),
            self.secret_access_key.is_some(),
            self.bucket.is_some(),
        ];
        set.iter().any(|s| *s) && !set.iter().all(|s| *s)
    }
}

/// Resolve the storage backend for the lifetime of the process.
///
/// Uses S3 when fully configured, otherwise the local `upload_dir`.
pub async fn build_object_store(
    config: &StorageConfig,
    upload_dir: impl Into<PathBuf>,
) -> Arc<dyn ObjectStore> {
    if let Some(settings) = config.s3_settings() {
        tracing::info!(bucket = %settings.bucket, region = %settings.region, "Using S3 image storage");
        return Arc::new(S3Store::connect(&settings).await);
    }

    let upload_dir = upload_dir.into();
    if config.is_partial() {
        tracing::warn!(
            dir = %upload_dir.display(),
            "S3 storage partially configured; falling back to local image storage"
        );
    } else {
        tracing::info!(dir = %upload_dir.display(), "Using local image storage");
    }
    Arc::new(LocalDiskStore::new(upload_dir))
}
