//! `pagecheck add <url>` – register a URL.

use anyhow::{bail, Result};
use pagecheck_core::registry::{register_or_find, RegisterError, RegisterStatus};
use pagecheck_core::store::Store;

pub async fn run_add(db: &Store, url: &str) -> Result<()> {
    let reg = match register_or_find(db, url).await {
        Ok(reg) => reg,
        Err(RegisterError::Validation(e)) => {
            bail!("Incorrect URL: {} (you entered: {:?})", e.kind, e.input)
        }
        Err(RegisterError::Storage(e)) => return Err(e),
    };

    match reg.status {
        RegisterStatus::Created => println!("Page successfully added: [{}] {}", reg.id, reg.name),
        RegisterStatus::AlreadyExists => println!("Page already exists: [{}] {}", reg.id, reg.name),
    }
    Ok(())
}
