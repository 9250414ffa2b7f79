//! `pagecheck show <id>` – one URL and its check history.

use anyhow::{bail, Result};
use pagecheck_core::store::Store;

use super::{field, when};

pub async fn run_show(db: &Store, id: i64, json: bool) -> Result<()> {
    let Some(url) = db.get_url(id).await? else {
        bail!("URL {id} not found");
    };
    let checks = db.list_checks(id).await?;

    if json {
        let doc = serde_json::json!({ "url": url, "checks": checks });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("ID:      {}", url.id);
    println!("Name:    {}", url.name);
    println!("Created: {}", when(url.created_at));
    println!();
    if checks.is_empty() {
        println!("No checks yet. Run `pagecheck check {id}`.");
        return Ok(());
    }
    println!(
        "{:<6} {:<6} {:<23} {:<24} {:<24} {}",
        "CHECK", "CODE", "CREATED", "H1", "TITLE", "DESCRIPTION"
    );
    for c in checks {
        let code = c
            .status_code
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<6} {:<6} {:<23} {:<24} {:<24} {}",
            c.id,
            code,
            when(c.created_at),
            field(c.h1.as_deref()),
            field(c.title.as_deref()),
            field(c.description.as_deref())
        );
    }
    Ok(())
}
