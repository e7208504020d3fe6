use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::ports::users::UsersRepository;
use crate::error::{PlatformError, Result};
use clipflow_model::User;

#[derive(Clone, Debug)]
pub struct PostgresUsersRepository {
    pool: PgPool,
}

impl PostgresUsersRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UsersRepository for PostgresUsersRepository {
    async fn get_user_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query_as::<
            _,
            (
                Uuid,
                String,
                Option<String>,
                Option<String>,
                DateTime<Utc>,
                bool,
            ),
        >(
            r#"
            SELECT id, username, nickname, avatar_url, created_at, is_active
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| PlatformError::Internal(format!("Failed to load user: {}", e)))?;

        Ok(row.map(
            |(id, username, nickname, avatar_url, created_at, is_active)| User {
                id,
                username,
                nickname,
                avatar_url,
                created_at,
                is_active,
            },
        ))
    }
}
