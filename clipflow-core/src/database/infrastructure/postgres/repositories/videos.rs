use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::ports::videos::VideosRepository;
use crate::error::{PlatformError, Result};
use clipflow_model::{CreatorSummary, VideoSummary};

#[derive(Clone, Debug)]
pub struct PostgresVideosRepository {
    pool: PgPool,
}

impl PostgresVideosRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl VideosRepository for PostgresVideosRepository {
    async fn get_summary(&self, video_id: Uuid) -> Result<Option<VideoSummary>> {
        let row = sqlx::query_as::<
            _,
            (
                Uuid,           // video id
                String,         // title
                Option<String>, // description
                i32,            // duration
                Option<String>, // cover_url
                i64,            // view_count
                Uuid,           // creator id
                String,         // creator username
                Option<String>, // creator nickname
                Option<String>, // creator avatar_url
            ),
        >(
            r#"
            SELECT v.id, v.title, v.description, v.duration, v.cover_url, v.view_count,
                   u.id, u.username, u.nickname, u.avatar_url
            FROM videos v
            JOIN users u ON u.id = v.creator_id
            WHERE v.id = $1
            "#,
        )
        .bind(video_id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| PlatformError::Internal(format!("Failed to load video: {}", e)))?;

        Ok(row.map(
            |(
                id,
                title,
                description,
                duration,
                cover_url,
                view_count,
                creator_id,
                username,
                nickname,
                avatar_url,
            )| VideoSummary {
                id,
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
        ))
    }
}
