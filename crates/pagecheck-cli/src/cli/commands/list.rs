//! `pagecheck list` – tracked URLs with their latest check.

use anyhow::Result;
use pagecheck_core::store::Store;

use super::when;

pub async fn run_list(db: &Store, json: bool) -> Result<()> {
    let urls = db.list_urls_with_latest_check().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&urls)?);
        return Ok(());
    }

    if urls.is_empty() {
        println!("No URLs tracked yet.");
        return Ok(());
    }
    println!("{:<6} {:<23} {:<6} {}", "ID", "LAST CHECK", "CODE", "NAME");
    for u in urls {
        let last = u
            .last_check_at
            .map(when)
            .unwrap_or_else(|| "-".to_string());
        let code = u
            .last_status_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:<6} {:<23} {:<6} {}", u.id, last, code, u.name);
    }
    Ok(())
}
