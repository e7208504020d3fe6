pub mod search_history;
pub mod users;
pub mod videos;
pub mod watch_history;

pub use search_history::PostgresSearchHistoryRepository;
pub use users::PostgresUsersRepository;
pub use videos::PostgresVideosRepository;
pub use watch_history::PostgresWatchHistoryRepository;
