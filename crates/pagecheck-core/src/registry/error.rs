use crate::url_model::ValidationError;

/// Failure of `register_or_find`. "Already exists" is not an error.
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("invalid URL: {0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
