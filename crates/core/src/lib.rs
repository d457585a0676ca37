//! Closet domain crate.
//!
//! Holds the error taxonomy, shared type aliases, and the pure rules for
//! clothing items and image uploads. No I/O lives here so the db, cloud and
//! api crates can all depend on it.

pub mod error;
pub mod item;
pub mod patch;
pub mod timestamp;
pub mod types;
pub mod upload;
