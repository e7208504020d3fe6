use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::error::{PlatformError, Result};

/// Open a connection pool against the platform database.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(|e| PlatformError::Internal(format!("Failed to connect to database: {}", e)))
}
