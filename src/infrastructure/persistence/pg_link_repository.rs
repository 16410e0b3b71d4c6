//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::utils::db_error::is_unique_violation_on_code;

/// PostgreSQL repository for link storage and retrieval.
///
/// Code uniqueness is enforced by the `links_code_key` unique index; click
/// counters are mutated in a single `UPDATE ... RETURNING` statement so
/// concurrent redirects serialize inside the database.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn backend(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.into())
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn exists(&self, code: &str) -> Result<bool, StoreError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM links WHERE code = $1)")
            .bind(code)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(backend)
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError> {
        sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (code, target_url)
            VALUES ($1, $2)
            RETURNING id, code, target_url, total_clicks, last_clicked, created_at, deleted
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.target_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_code(&e) {
                StoreError::DuplicateCode
            } else {
                backend(e)
            }
        })
    }

    async fn increment_and_fetch(&self, code: &str) -> Result<String, StoreError> {
        let target_url = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE links
            SET total_clicks = total_clicks + 1,
                last_clicked = NOW()
            WHERE code = $1 AND NOT deleted
            RETURNING target_url
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(backend)?;

        target_url.ok_or(StoreError::NotFound)
    }

    async fn mark_deleted(&self, code: &str) -> Result<(), StoreError> {
        sqlx::query("UPDATE links SET deleted = TRUE WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await
            .map_err(backend)?;

        Ok(())
    }

    async fn list_live(&self) -> Result<Vec<Link>, StoreError> {
        sqlx::query_as::<_, Link>(
            r#"
            SELECT id, code, target_url, total_clicks, last_clicked, created_at, deleted
            FROM links
            WHERE NOT deleted
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(backend)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(backend)?;

        Ok(())
    }
}
