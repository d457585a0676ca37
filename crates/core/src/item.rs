//! Clothing item constants, sort options and list helpers.
//!
//! Shared by the repository layer (which turns them into SQL) and the API
//! layer (which deserializes them from the query string).

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in `NotFound` errors.
pub const ENTITY_NAME: &str = "ClothingItem";

/// Owner assigned to items created without one.
pub const DEFAULT_OWNER: &str = "default";

/// Default number of items returned by a list call.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Largest page a list call may request.
pub const MAX_LIST_LIMIT: i64 = 1000;

/// Serde default for `owner` fields.
pub fn default_owner() -> String {
    DEFAULT_OWNER.to_string()
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Column a list call is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    CreatedAt,
    Name,
    Category,
    PurchaseDate,
}

impl SortField {
    /// Column name in the `clothing_items` table.
    pub fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Name => "name",
            Self::Category => "category",
            Self::PurchaseDate => "purchase_date",
        }
    }
}

/// Sort direction of a list call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Paging and filter helpers
// ---------------------------------------------------------------------------

/// Clamp a requested limit into `[1, MAX_LIST_LIMIT]`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT)
}

/// Clamp a requested offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Treat empty filter values as absent. Whitespace is a real value.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Build an `ILIKE` pattern matching `term` as a literal substring.
///
/// `%`, `_` and `\` in the term are escaped so they match themselves.
pub fn substring_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
