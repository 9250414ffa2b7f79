use crate::store::UrlId;

/// Failure of `run_check` that is not a fetch outcome.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("URL {0} not found")]
    NotFound(UrlId),
    #[error("fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
