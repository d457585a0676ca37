//! Serde support for partial updates.
//!
//! Update DTOs use `Option<Option<T>>` for nullable columns: the outer
//! `Option` records whether the field was present in the request body, the
//! inner one whether it carried a value or an explicit `null`. Plain serde
//! collapses `null` and "missing" into the same `None`, so fields must be
//! annotated with:
//!
//! ```ignore
//! #[serde(default, deserialize_with = "closet_core::patch::double_option")]
//! pub description: Option<Option<String>>,
//! ```

use serde::{Deserialize, Deserializer};

/// Deserialize a present field into `Some(inner)`, where `inner` is `None`
/// for an explicit `null`. Missing fields fall back to `#[serde(default)]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
