//! URL validation and canonicalization.
//!
//! A tracked URL is identified by scheme and host only; everything after the
//! host (port, path, query, fragment) is dropped before deduplication.

mod canonical;
mod error;

pub use canonical::{normalize, CanonicalUrl, MAX_URL_LEN};
pub use error::{ValidationError, ValidationErrorKind};
