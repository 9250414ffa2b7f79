//! URL rows: insert with uniqueness check, lookups, and the list view.

use anyhow::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::db::{unix_timestamp, Store};
use super::types::{InsertUrl, TrackedUrl, UrlId, UrlListing};

fn tracked_url_from_row(row: &SqliteRow) -> TrackedUrl {
    TrackedUrl {
        id: row.get("id"),
        name: row.get("name"),
        created_at: row.get("created_at"),
    }
}

impl Store {
    /// Insert a URL by canonical name.
    ///
    /// A unique-constraint violation is reported as `InsertUrl::Conflict`
    /// rather than an error; every other failure is an error.
    pub async fn insert_url(&self, name: &str) -> Result<InsertUrl> {
        let now = unix_timestamp();
        let res = sqlx::query(
            r#"
            INSERT INTO urls (name, created_at)
            VALUES (?1, ?2)
            "#,
        )
        .bind(name)
        .bind(now)
        .execute(&self.pool)
        .await;

        match res {
            Ok(done) => Ok(InsertUrl::Inserted(done.last_insert_rowid())),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                tracing::debug!(url = %name, "insert hit unique constraint");
                Ok(InsertUrl::Conflict)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Exact, case-sensitive lookup by canonical name.
    pub async fn find_url_by_name(&self, name: &str) -> Result<Option<TrackedUrl>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM urls
            WHERE name = ?1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(tracked_url_from_row))
    }

    pub async fn get_url(&self, id: UrlId) -> Result<Option<TrackedUrl>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM urls
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(tracked_url_from_row))
    }

    /// All URLs, newest id first, each with its latest check (highest check id).
    pub async fn list_urls_with_latest_check(&self) -> Result<Vec<UrlListing>> {
        let rows = sqlx::query(
            r#"
            SELECT
                u.id, u.name, u.created_at,
                c.created_at AS last_check_at,
                c.status_code AS last_status_code
            FROM urls u
            LEFT JOIN url_checks c
                ON c.id = (SELECT MAX(id) FROM url_checks WHERE url_id = u.id)
            ORDER BY u.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(UrlListing {
                id: row.get("id"),
                name: row.get("name"),
                created_at: row.get("created_at"),
                last_check_at: row.get("last_check_at"),
                last_status_code: row.get("last_status_code"),
            });
        }

        Ok(out)
    }
}
