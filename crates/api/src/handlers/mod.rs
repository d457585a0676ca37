//! Request handlers.
//!
//! Handlers delegate to the repository in `closet_db` or the upload handler
//! in `closet_cloud` and map errors via [`AppError`](crate::error::AppError).

pub mod items;
pub mod upload;
