use std::sync::Arc;

use closet_cloud::UploadHandler;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: closet_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Image upload handler bound to the storage backend chosen at startup.
    pub uploads: Arc<UploadHandler>,
}
