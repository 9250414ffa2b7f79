//! Check rows: append and history.

use anyhow::Result;
use sqlx::Row;

use super::db::{unix_timestamp, Store};
use super::types::{NewPageCheck, PageCheck, UrlId};

impl Store {
    /// Append a check and return the stored row.
    pub async fn insert_check(&self, check: &NewPageCheck) -> Result<PageCheck> {
        let now = unix_timestamp();
        let id = sqlx::query(
            r#"
            INSERT INTO url_checks (
                url_id, status_code, h1, title, description, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(check.url_id)
        .bind(check.status_code)
        .bind(check.h1.as_deref())
        .bind(check.title.as_deref())
        .bind(check.description.as_deref())
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(PageCheck {
            id,
            url_id: check.url_id,
            status_code: check.status_code,
            h1: check.h1.clone(),
            title: check.title.clone(),
            description: check.description.clone(),
            created_at: now,
        })
    }

    /// Every check for one URL, newest first.
    pub async fn list_checks(&self, url_id: UrlId) -> Result<Vec<PageCheck>> {
        let rows = sqlx::query(
            r#"
            SELECT id, url_id, status_code, h1, title, description, created_at
            FROM url_checks
            WHERE url_id = ?1
            ORDER BY id DESC
            "#,
        )
        .bind(url_id)
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(PageCheck {
                id: row.get("id"),
                url_id: row.get("url_id"),
                status_code: row.get("status_code"),
                h1: row.get("h1"),
                title: row.get("title"),
                description: row.get("description"),
                created_at: row.get("created_at"),
            });
        }

        Ok(out)
    }
}
