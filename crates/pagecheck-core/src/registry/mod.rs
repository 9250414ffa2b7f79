//! URL registry: validate, canonicalize, then find or create the tracked URL.

mod error;

pub use error::RegisterError;

use anyhow::anyhow;

use crate::store::{InsertUrl, Store, UrlId};
use crate::url_model;

/// Whether `register_or_find` created a row or matched an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterStatus {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub id: UrlId,
    /// Canonical `scheme://host` the input was reduced to.
    pub name: String,
    pub status: RegisterStatus,
}

/// Registers `raw` under its canonical name, or returns the existing entry.
///
/// Inputs that differ only after the host map to the same row. The `urls.name`
/// unique constraint settles races: a conflicting insert re-reads the winner's
/// row and reports `AlreadyExists`.
pub async fn register_or_find(store: &Store, raw: &str) -> Result<Registration, RegisterError> {
    let canonical = url_model::normalize(raw)?;
    let name = canonical.into_string();

    if let Some(existing) = store.find_url_by_name(&name).await? {
        tracing::debug!(id = existing.id, url = %name, "url already registered");
        return Ok(Registration {
            id: existing.id,
            name,
            status: RegisterStatus::AlreadyExists,
        });
    }

    match store.insert_url(&name).await? {
        InsertUrl::Inserted(id) => {
            tracing::info!(id, url = %name, "url registered");
            Ok(Registration {
                id,
                name,
                status: RegisterStatus::Created,
            })
        }
        InsertUrl::Conflict => {
            let existing = store
                .find_url_by_name(&name)
                .await?
                .ok_or_else(|| anyhow!("url {name} conflicted on insert but is not stored"))?;
            tracing::debug!(id = existing.id, url = %name, "lost insert race, using existing row");
            Ok(Registration {
                id: existing.id,
                name,
                status: RegisterStatus::AlreadyExists,
            })
        }
    }
}
