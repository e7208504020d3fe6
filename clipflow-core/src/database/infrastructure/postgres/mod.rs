pub mod repositories;

pub use repositories::{
    PostgresSearchHistoryRepository, PostgresUsersRepository,
    PostgresVideosRepository, PostgresWatchHistoryRepository,
};
