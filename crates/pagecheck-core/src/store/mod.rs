//! Persistent URL and check database (SQLite via sqlx).
//!
//! Two tables: `urls` holds one row per canonical URL (unique by name) and
//! `url_checks` holds the append-only audit trail of page checks.

mod checks;
mod db;
mod types;
mod urls;

pub use db::Store;
pub use types::*;

#[cfg(test)]
pub(crate) use db::open_memory;
