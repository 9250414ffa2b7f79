//! Error types for URL validation.

use super::canonical::MAX_URL_LEN;

/// Rejected URL input. Keeps the raw text so the caller can show it again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ValidationError {
    pub input: String,
    pub kind: ValidationErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationErrorKind {
    #[error("URL is empty")]
    Empty,
    #[error("scheme and host exceed {} characters", MAX_URL_LEN)]
    TooLong,
    #[error("malformed URL: {0}")]
    Malformed(String),
    #[error("unsupported scheme `{0}` (expected http or https)")]
    UnsupportedScheme(String),
    #[error("URL has no host")]
    MissingHost,
}

impl ValidationError {
    pub(crate) fn new(input: &str, kind: ValidationErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }
}
