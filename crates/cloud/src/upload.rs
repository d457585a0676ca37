//! Batch image upload.

use std::sync::Arc;

use closet_core::error::CoreError;
use closet_core::upload::{unique_filename, validate_image_content_type};

use crate::store::ObjectStore;

/// One file of an upload batch as received from the client.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Validates and stores batches of images through the configured backend.
pub struct UploadHandler {
    store: Arc<dyn ObjectStore>,
}

impl UploadHandler {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Identifier of the backend files are written to.
    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    /// Store every file and return their URLs in input order.
    ///
    /// Files are handled one at a time. The first non-image file fails the
    /// batch with [`CoreError::Validation`] and the first failed write with
    /// [`CoreError::StorageWrite`]; files already stored earlier in the batch
    /// are left in place.
    pub async fn upload_batch(&self, files: &[UploadFile]) -> Result<Vec<String>, CoreError> {
        let mut urls = Vec::with_capacity(files.len());

        for file in files {
            let content_type =
                validate_image_content_type(&file.filename, file.content_type.as_deref())?;
            let stored_name = unique_filename(&file.filename);

            let url = self
                .store
                .put(&stored_name, &file.data, content_type)
                .await
                .map_err(|e| CoreError::StorageWrite {
                    filename: file.filename.clone(),
                    reason: e.to_string(),
                })?;

            tracing::info!(
                filename = %file.filename,
                stored_name = %stored_name,
                size = file.data.len(),
                backend = self.store.backend(),
                "Image stored",
            );
            urls.push(url);
        }

        Ok(urls)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use super::*;
    use crate::local::LocalDiskStore;
    use crate::store::StorageError;

    fn image(name: &str) -> UploadFile {
        UploadFile {
            filename: name.to_string(),
            content_type: Some("image/jpeg".to_string()),
            data: name.as_bytes().to_vec(),
        }
    }

    fn text(name: &str) -> UploadFile {
        UploadFile {
            filename: name.to_string(),
            content_type: Some("text/plain".to_string()),
            data: b"hello".to_vec(),
        }
    }

    fn files_in(dir: &std::path::Path) -> Vec<String> {
        match std::fs::read_dir(dir) {
            Ok(entries) => entries
                .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Records keys and fails on the configured call index.
    struct RecordingStore {
        puts: Mutex<Vec<(String, String)>>,
        fail_on: Option<usize>,
    }

    #[async_trait]
    impl ObjectStore for RecordingStore {
        async fn put(
            &self,
            name: &str,
            _data: &[u8],
            content_type: &str,
        ) -> Result<String, StorageError> {
            let mut puts = self.puts.lock().unwrap();
            if self.fail_on == Some(puts.len()) {
                return Err(StorageError::S3("bucket unavailable".into()));
            }
            puts.push((name.to_string(), content_type.to_string()));
            Ok(format!("mem://{name}"))
        }

        fn backend(&self) -> &'static str {
            "memory"
        }
    }

    #[tokio::test]
    async fn two_images_land_on_disk_with_distinct_urls() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("uploads");
        let handler = UploadHandler::new(Arc::new(LocalDiskStore::new(&dir)));

        let urls = handler
            .upload_batch(&[image("front.jpg"), image("back.jpg")])
            .await
            .unwrap();

        assert_eq!(urls.len(), 2);
        assert_ne!(urls[0], urls[1]);
        for url in &urls {
            let name = url.strip_prefix("/uploads/").expect("root-relative url");
            assert!(name.ends_with(".jpg"));
            assert!(dir.join(name).exists());
        }
    }

    #[tokio::test]
    async fn non_image_is_rejected_without_writing() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("uploads");
        let handler = UploadHandler::new(Arc::new(LocalDiskStore::new(&dir)));

        let err = handler.upload_batch(&[text("notes.txt")]).await.unwrap_err();

        assert_matches!(err, CoreError::Validation(ref msg) if msg.contains("notes.txt"));
        assert!(files_in(&dir).is_empty());
    }

    #[tokio::test]
    async fn bad_file_mid_batch_keeps_earlier_files() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("uploads");
        let handler = UploadHandler::new(Arc::new(LocalDiskStore::new(&dir)));

        let err = handler
            .upload_batch(&[image("ok.jpg"), text("bad.txt"), image("never.jpg")])
            .await
            .unwrap_err();

        assert_matches!(err, CoreError::Validation(_));
        assert_eq!(files_in(&dir).len(), 1);
    }

    #[tokio::test]
    async fn missing_content_type_is_rejected() {
        let store = Arc::new(RecordingStore {
            puts: Mutex::new(Vec::new()),
            fail_on: None,
        });
        let handler = UploadHandler::new(store.clone());
        let file = UploadFile {
            content_type: None,
            ..image("mystery.jpg")
        };

        assert_matches!(
            handler.upload_batch(&[file]).await,
            Err(CoreError::Validation(_))
        );
        assert!(store.puts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn urls_follow_input_order_and_content_type_is_forwarded() {
        let store = Arc::new(RecordingStore {
            puts: Mutex::new(Vec::new()),
            fail_on: None,
        });
        let handler = UploadHandler::new(store.clone());
        let png = UploadFile {
            content_type: Some("image/png".into()),
            ..image("b.png")
        };

        let urls = handler.upload_batch(&[image("a.jpg"), png]).await.unwrap();

        let puts = store.puts.lock().unwrap();
        assert_eq!(urls[0], format!("mem://{}", puts[0].0));
        assert_eq!(urls[1], format!("mem://{}", puts[1].0));
        assert_eq!(puts[0].1, "image/jpeg");
        assert_eq!(puts[1].1, "image/png");
        assert!(puts[1].0.ends_with(".png"));
    }

    #[tokio::test]
    async fn write_failure_names_the_file() {
        let store = Arc::new(RecordingStore {
            puts: Mutex::new(Vec::new()),
            fail_on: Some(1),
        });
        let handler = UploadHandler::new(store.clone());

        let err = handler
            .upload_batch(&[image("first.jpg"), image("second.jpg")])
            .await
            .unwrap_err();

        assert_matches!(
            err,
            CoreError::StorageWrite { ref filename, .. } if filename == "second.jpg"
        );
        assert_eq!(store.puts.lock().unwrap().len(), 1);
        assert_eq!(handler.backend(), "memory");
    }
}
