//! Page check runner: fetch a tracked URL, extract SEO fields, record the check.

mod error;

pub use error::CheckError;

use crate::fetch_page::{FetchOutcome, Fetcher, TransportKind};
use crate::page_meta;
use crate::store::{NewPageCheck, PageCheck, Store, UrlId};

/// What happened to one check request.
///
/// Only `Checked` persists a row; the failure variants leave the store untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Checked(PageCheck),
    /// Server answered with an HTTP error status.
    CheckFailed { status: u32 },
    /// No response: DNS, connect, timeout, or malformed reply.
    TransportError { kind: TransportKind, message: String },
}

impl CheckOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckOutcome::Checked(_))
    }
}

/// Runs one check against the URL stored under `url_id`.
///
/// The id is resolved before any network work; an unknown id is `NotFound`.
pub async fn run_check(
    store: &Store,
    fetcher: &Fetcher,
    url_id: UrlId,
) -> Result<CheckOutcome, CheckError> {
    let url = store
        .get_url(url_id)
        .await?
        .ok_or(CheckError::NotFound(url_id))?;

    tracing::debug!(id = url_id, url = %url.name, "checking page");
    let fetched = tokio::task::spawn_blocking({
        let fetcher = fetcher.clone();
        let target = url.name.clone();
        move || fetcher.get(&target)
    })
    .await?;

    match fetched {
        FetchOutcome::Response { status, body } => {
            let meta = page_meta::extract(&body);
            let check = store
                .insert_check(&NewPageCheck {
                    url_id,
                    status_code: Some(i64::from(status)),
                    h1: meta.h1,
                    title: meta.title,
                    description: meta.description,
                })
                .await?;
            tracing::info!(id = url_id, check_id = check.id, status, "page checked");
            Ok(CheckOutcome::Checked(check))
        }
        FetchOutcome::HttpError { status } => {
            tracing::warn!(id = url_id, url = %url.name, status, "check failed: HTTP error status");
            Ok(CheckOutcome::CheckFailed { status })
        }
        FetchOutcome::Transport { kind, message } => {
            tracing::warn!(
                id = url_id,
                url = %url.name,
                kind = kind.as_str(),
                "check failed: {}",
                message
            );
            Ok(CheckOutcome::TransportError { kind, message })
        }
    }
}
