//! History bounded context: domain rules shared by services and adapters.

pub mod history;

pub use history::{
    KeywordSubmission, SEARCH_HISTORY_CAP, WATCHING_NOW_COMPLETION_CUTOFF,
    WATCHING_NOW_WINDOW_MINUTES, is_watching_now, normalize_keyword,
};
