use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Writing one file of an upload batch to its storage target failed.
    #[error("Failed to upload {filename}: {reason}")]
    StorageWrite { filename: String, reason: String },
}
