//! Image storage for clothing items.
//!
//! The [`ObjectStore`] trait abstracts over where uploaded images end up:
//! [`LocalDiskStore`] writes into a directory served by the API, [`S3Store`]
//! puts objects into a bucket. Which one is used is decided once at startup
//! by [`build_object_store`] and injected into the [`UploadHandler`].

pub mod config;
pub mod local;
pub mod s3;
pub mod store;
pub mod upload;

pub use config::{build_object_store, S3Settings, StorageConfig};
pub use local::LocalDiskStore;
pub use s3::S3Store;
pub use store::{ObjectStore, StorageError};
pub use upload::{UploadFile, UploadHandler};
