//! `pagecheck check <id>` – fetch a tracked URL and record the result.

use anyhow::{bail, Result};
use pagecheck_core::checker::{self, CheckError, CheckOutcome};
use pagecheck_core::fetch_page::Fetcher;
use pagecheck_core::store::Store;

use super::field;

pub async fn run_check(db: &Store, fetcher: &Fetcher, id: i64) -> Result<()> {
    let outcome = match checker::run_check(db, fetcher, id).await {
        Ok(o) => o,
        Err(CheckError::NotFound(id)) => bail!("URL {id} not found"),
        Err(e) => return Err(e.into()),
    };

    match outcome {
        CheckOutcome::Checked(c) => {
            let code = c
                .status_code
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("Page successfully checked (check {}, HTTP {})", c.id, code);
            println!("  title:       {}", field(c.title.as_deref()));
            println!("  h1:          {}", field(c.h1.as_deref()));
            println!("  description: {}", field(c.description.as_deref()));
            Ok(())
        }
        CheckOutcome::CheckFailed { status } => {
            tracing::debug!(id, status, "check reported HTTP error");
            bail!("An error occurred during the check (HTTP {status})")
        }
        CheckOutcome::TransportError { kind, message } => {
            tracing::debug!(id, kind = kind.as_str(), "check reported transport error");
            bail!("An error occurred during the check ({message})")
        }
    }
}
