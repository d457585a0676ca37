use chrono::{DateTime, Utc};

/// Primary key of `clothing_items` (BIGSERIAL).
pub type DbId = i64;

/// Stored as TIMESTAMPTZ and always handled in UTC.
pub type Timestamp = DateTime<Utc>;
