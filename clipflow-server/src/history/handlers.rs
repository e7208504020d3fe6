use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use clipflow_core::KeywordSubmission;
use clipflow_model::{SearchHistoryEntry, User, WatchHistoryEntry};

use crate::errors::AppResult;
use crate::infra::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct WatchProgressBody {
    /// Elapsed playback seconds; omitted on first-open reports
    #[serde(default)]
    pub progress: i32,
}

/// List the authenticated user's watch history
///
/// # Response
///
/// `200 OK` with the history entries, most recently updated first. Each
/// entry carries the video summary and the creator's display fields.
pub async fn get_watch_history_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> AppResult<Json<Vec<WatchHistoryEntry>>> {
    let entries = state.history_service.watch_history(user.id).await?;
    Ok(Json(entries))
}

/// Record playback progress for a video
///
/// Creates the history entry on the first report and refreshes progress and
/// recency on every subsequent one. The body is optional; a missing body
/// reports progress zero.
///
/// # Response
///
/// - `200 OK` on success
/// - `404 Not Found` when the video does not exist
pub async fn update_watch_progress_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(video_id): Path<Uuid>,
    body: Option<Json<WatchProgressBody>>,
) -> AppResult<Json<Value>> {
    let progress = body.map(|Json(b)| b.progress).unwrap_or(0);

    state
        .history_service
        .add_watch_progress(user.id, video_id, progress)
        .await?;

    Ok(Json(json!({ "message": "Watch progress recorded" })))
}

/// Remove one watch-history entry
pub async fn remove_watch_entry_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(video_id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    state
        .history_service
        .remove_watch_entry(user.id, video_id)
        .await?;

    Ok(Json(json!({ "message": "Watch history entry removed" })))
}

/// Clear the user's entire watch history
pub async fn clear_watch_history_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> AppResult<Json<Value>> {
    state.history_service.clear_watch_history(user.id).await?;

    Ok(Json(json!({ "message": "Watch history cleared" })))
}

/// "Currently watching" lookup
///
/// Returns the most recent watch entry while it is both fresh (touched
/// within the last 30 minutes) and meaningfully incomplete, otherwise
/// `null`. Nothing about a viewing session is persisted; the signal is
/// derived entirely from the latest history entry.
pub async fn get_watching_now_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> AppResult<Json<Option<WatchHistoryEntry>>> {
    let entry = state.history_service.watching_now(user.id).await?;
    Ok(Json(entry))
}

/// List the user's recent search keywords
pub async fn get_search_history_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> AppResult<Json<Vec<SearchHistoryEntry>>> {
    let entries = state.history_service.search_history(user.id).await?;
    Ok(Json(entries))
}

/// Record a search keyword
///
/// The keyword arrives URL-encoded in the path. Whitespace-only keywords
/// are rejected as a structured result, not an error:
///
/// ```json
/// { "success": false, "message": "Search keyword must not be empty" }
/// ```
pub async fn add_search_keyword_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(keyword): Path<String>,
) -> AppResult<Json<Value>> {
    let outcome = state
        .history_service
        .add_search_keyword(user.id, &keyword)
        .await?;

    let body = match outcome {
        KeywordSubmission::Accepted => json!({
            "success": true,
            "message": "Search keyword recorded",
        }),
        KeywordSubmission::RejectedEmpty => json!({
            "success": false,
            "message": "Search keyword must not be empty",
        }),
    };

    Ok(Json(body))
}

/// Remove one search keyword
pub async fn remove_search_keyword_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(keyword): Path<String>,
) -> AppResult<Json<Value>> {
    state
        .history_service
        .remove_search_keyword(user.id, &keyword)
        .await?;

    Ok(Json(json!({ "message": "Search keyword removed" })))
}

/// Clear the user's entire search history
pub async fn clear_search_history_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> AppResult<Json<Value>> {
    state.history_service.clear_search_history(user.id).await?;

    Ok(Json(json!({ "message": "Search history cleared" })))
}

/// Liveness probe
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
