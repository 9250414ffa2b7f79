//! Row types for the URL/check database.

use serde::Serialize;

/// URL identifier.
pub type UrlId = i64;

/// Check identifier.
pub type CheckId = i64;

/// A registered, deduplicated URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackedUrl {
    pub id: UrlId,
    /// Canonical `scheme://host`.
    pub name: String,
    /// Unix seconds.
    pub created_at: i64,
}

/// One stored page check.
///
/// Text fields are `None` when the tag was absent and `Some("")` when it was
/// present with no text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageCheck {
    pub id: CheckId,
    pub url_id: UrlId,
    pub status_code: Option<i64>,
    pub h1: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Unix seconds.
    pub created_at: i64,
}

/// Fields written by `Store::insert_check`; id and timestamp are assigned on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPageCheck {
    pub url_id: UrlId,
    pub status_code: Option<i64>,
    pub h1: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// List view: a URL with its most recent check, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlListing {
    pub id: UrlId,
    pub name: String,
    pub created_at: i64,
    pub last_check_at: Option<i64>,
    pub last_status_code: Option<i64>,
}

/// Result of `Store::insert_url`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertUrl {
    Inserted(UrlId),
    /// Another row already holds this name (unique constraint).
    Conflict,
}
