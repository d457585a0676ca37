//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod clothing_item_repo;

pub use clothing_item_repo::ClothingItemRepo;
