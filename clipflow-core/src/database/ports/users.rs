use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use clipflow_model::User;

/// Read-only user lookup consumed by the authentication layer.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn get_user_by_id(&self, user_id: Uuid) -> Result<Option<User>>;
}
