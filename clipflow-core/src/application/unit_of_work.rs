use std::any::type_name_of_val;
use std::fmt;
use std::sync::Arc;

use sqlx::PgPool;

use crate::database::infrastructure::postgres::{
    PostgresSearchHistoryRepository, PostgresUsersRepository,
    PostgresVideosRepository, PostgresWatchHistoryRepository,
};
use crate::database::ports::{
    SearchHistoryRepository, UsersRepository, VideosRepository,
    WatchHistoryRepository,
};

/// Aggregates all repository ports used by application services.
///
/// Services depend on this composition instead of a monolithic database
/// interface, which keeps construction and testing straightforward.
#[derive(Clone)]
pub struct AppUnitOfWork {
    pub watch_history: Arc<dyn WatchHistoryRepository>,
    pub search_history: Arc<dyn SearchHistoryRepository>,
    pub videos: Arc<dyn VideosRepository>,
    pub users: Arc<dyn UsersRepository>,
}

impl AppUnitOfWork {
    /// Production wiring: every port backed by Postgres on a shared pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            watch_history: Arc::new(PostgresWatchHistoryRepository::new(pool.clone())),
            search_history: Arc::new(PostgresSearchHistoryRepository::new(pool.clone())),
            videos: Arc::new(PostgresVideosRepository::new(pool.clone())),
            users: Arc::new(PostgresUsersRepository::new(pool)),
        }
    }
}

impl fmt::Debug for AppUnitOfWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppUnitOfWork")
            .field(
                "watch_history",
                &type_name_of_val(self.watch_history.as_ref()),
            )
            .field(
                "search_history",
                &type_name_of_val(self.search_history.as_ref()),
            )
            .field("videos", &type_name_of_val(self.videos.as_ref()))
            .field("users", &type_name_of_val(self.users.as_ref()))
            .finish()
    }
}
