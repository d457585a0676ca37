//! Amazon S3 backend.

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use closet_core::upload::{s3_object_key, s3_public_url};

use crate::config::S3Settings;
use crate::store::{ObjectStore, StorageError};

/// Puts images into a bucket under the `clothing-items/` prefix.
///
/// The client is built once from explicit credentials and reused for every
/// request.
pub struct S3Store {
    client: aws_sdk_s3::Client,
    bucket: String,
    region: String,
}

impl S3Store {
    /// Build an S3 client from static credentials and a region.
    pub async fn connect(settings: &S3Settings) -> Self {
        let credentials = aws_credential_types::Credentials::new(
            settings.access_key_id.clone(),
            settings.secret_access_key.clone(),
            None,
            None,
            "closet-env",
        );

        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new(settings.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        Self::with_client(
            aws_sdk_s3::Client::new(&sdk_config),
            settings.bucket.clone(),
            settings.region.clone(),
        )
    }

    /// Wrap an already constructed client.
    pub fn with_client(client: aws_sdk_s3::Client, bucket: String, region: String) -> Self {
        Self {
            client,
            bucket,
            region,
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put(
        &self,
        name: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<String, StorageError> {
        let key = s3_object_key(name);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(data.to_vec()))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::S3(DisplayErrorContext(&e).to_string()))?;

        tracing::info!(bucket = %self.bucket, key = %key, size = data.len(), "S3 upload");
        Ok(s3_public_url(&self.bucket, &self.region, &key))
    }

    fn backend(&self) -> &'static str {
        "s3"
    }
}
