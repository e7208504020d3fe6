use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::ports::watch_history::WatchHistoryRepository;
use crate::error::{PlatformError, Result};
use clipflow_model::{CreatorSummary, VideoSummary, WatchHistoryEntry};

/// Joined row shape shared by the list and latest queries.
type WatchHistoryRow = (
    i32,                  // progress
    DateTime<Utc>,        // created_at
    DateTime<Utc>,        // updated_at
    Uuid,                 // video id
    String,               // title
    Option<String>,       // description
    i32,                  // duration
    Option<String>,       // cover_url
    i64,                  // view_count
    Uuid,                 // creator id
    String,               // creator username
    Option<String>,       // creator nickname
    Option<String>,       // creator avatar_url
);

const SELECT_ENTRY: &str = r#"
    SELECT wh.progress, wh.created_at, wh.updated_at,
           v.id, v.title, v.description, v.duration, v.cover_url, v.view_count,
           u.id, u.username, u.nickname, u.avatar_url
    FROM watch_history wh
    JOIN videos v ON v.id = wh.video_id
    JOIN users u ON u.id = v.creator_id
    WHERE wh.user_id = $1
    ORDER BY wh.updated_at DESC
"#;

fn entry_from_row(row: WatchHistoryRow) -> WatchHistoryEntry {
    let (
        progress,
        created_at,
        updated_at,
        video_id,
        title,
        description,
        duration,
        cover_url,
        view_count,
        creator_id,
        username,
        nickname,
        avatar_url,
    ) = row;
    WatchHistoryEntry {
        video: VideoSummary {
            id: video_id,
            title,
            description,
            duration,
            cover_url,
            view_count,
            creator: CreatorSummary {
                id: creator_id,
                username,
                nickname,
                avatar_url,
            },
        },
        progress,
        created_at,
        updated_at,
    }
}

#[derive(Clone, Debug)]
pub struct PostgresWatchHistoryRepository {
    pool: PgPool,
}

impl PostgresWatchHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl WatchHistoryRepository for PostgresWatchHistoryRepository {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<WatchHistoryEntry>> {
        let rows = sqlx::query_as::<_, WatchHistoryRow>(SELECT_ENTRY)
            .bind(user_id)
            .fetch_all(self.pool())
            .await
            .map_err(|e| {
                PlatformError::Internal(format!("Failed to list watch history: {}", e))
            })?;

        Ok(rows.into_iter().map(entry_from_row).collect())
    }

    async fn latest_for_user(&self, user_id: Uuid) -> Result<Option<WatchHistoryEntry>> {
        let row = sqlx::query_as::<_, WatchHistoryRow>(&format!("{SELECT_ENTRY} LIMIT 1"))
            .bind(user_id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| {
                PlatformError::Internal(format!(
                    "Failed to load latest watch entry: {}",
                    e
                ))
            })?;

        Ok(row.map(entry_from_row))
    }

    async fn upsert_progress(
        &self,
        user_id: Uuid,
        video_id: Uuid,
        progress: i32,
    ) -> Result<()> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO watch_history (user_id, video_id, progress, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            ON CONFLICT (user_id, video_id) DO UPDATE SET
                progress = EXCLUDED.progress,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(user_id)
        .bind(video_id)
        .bind(progress)
        .bind(now)
        .execute(self.pool())
        .await
        .map_err(|e| {
            PlatformError::Internal(format!("Failed to upsert watch progress: {}", e))
        })?;

        Ok(())
    }

    async fn remove(&self, user_id: Uuid, video_id: Uuid) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM watch_history
            WHERE user_id = $1 AND video_id = $2
            "#,
        )
        .bind(user_id)
        .bind(video_id)
        .execute(self.pool())
        .await
        .map_err(|e| {
            PlatformError::Internal(format!("Failed to remove watch entry: {}", e))
        })?;

        // Delete-by-unique-key semantics: the record must exist
        if result.rows_affected() == 0 {
            return Err(PlatformError::NotFound(format!(
                "No watch entry for video {}",
                video_id
            )));
        }

        Ok(())
    }

    async fn clear(&self, user_id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM watch_history
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .execute(self.pool())
        .await
        .map_err(|e| {
            PlatformError::Internal(format!("Failed to clear watch history: {}", e))
        })?;

        Ok(result.rows_affected())
    }
}
