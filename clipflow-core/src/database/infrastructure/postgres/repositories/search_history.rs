use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::ports::search_history::SearchHistoryRepository;
use crate::error::{PlatformError, Result};
use clipflow_model::SearchHistoryEntry;

#[derive(Clone, Debug)]
pub struct PostgresSearchHistoryRepository {
    pool: PgPool,
}

impl PostgresSearchHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SearchHistoryRepository for PostgresSearchHistoryRepository {
    async fn list_for_user(&self, user_id: Uuid, limit: i64) -> Result<Vec<SearchHistoryEntry>> {
        let rows = sqlx::query_as::<_, (String, DateTime<Utc>)>(
            r#"
            SELECT keyword, updated_at
            FROM search_history
            WHERE user_id = $1
            ORDER BY updated_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(self.pool())
        .await
        .map_err(|e| {
            PlatformError::Internal(format!("Failed to list search history: {}", e))
        })?;

        Ok(rows
            .into_iter()
            .map(|(keyword, updated_at)| SearchHistoryEntry {
                keyword,
                updated_at,
            })
            .collect())
    }

    async fn upsert_keyword(&self, user_id: Uuid, keyword: &str) -> Result<()> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO search_history (user_id, keyword, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, keyword) DO UPDATE SET
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(user_id)
        .bind(keyword)
        .bind(now)
        .execute(self.pool())
        .await
        .map_err(|e| {
            PlatformError::Internal(format!("Failed to upsert search keyword: {}", e))
        })?;

        Ok(())
    }

    async fn trim_to_most_recent(&self, user_id: Uuid, cap: i64) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM search_history
            WHERE user_id = $1
              AND keyword NOT IN (
                  SELECT keyword
                  FROM search_history
                  WHERE user_id = $1
                  ORDER BY updated_at DESC
                  LIMIT $2
              )
            "#,
        )
        .bind(user_id)
        .bind(cap)
        .execute(self.pool())
        .await
        .map_err(|e| {
            PlatformError::Internal(format!("Failed to trim search history: {}", e))
        })?;

        Ok(result.rows_affected())
    }

    async fn remove(&self, user_id: Uuid, keyword: &str) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM search_history
            WHERE user_id = $1 AND keyword = $2
            "#,
        )
        .bind(user_id)
        .bind(keyword)
        .execute(self.pool())
        .await
        .map_err(|e| {
            PlatformError::Internal(format!("Failed to remove search keyword: {}", e))
        })?;

        Ok(())
    }

    async fn clear(&self, user_id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM search_history
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .execute(self.pool())
        .await
        .map_err(|e| {
            PlatformError::Internal(format!("Failed to clear search history: {}", e))
        })?;

        Ok(result.rows_affected())
    }
}
