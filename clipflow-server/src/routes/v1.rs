use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    history::handlers,
    infra::app_state::AppState,
    users::auth::middleware::auth_middleware,
};

/// Create all v1 API routes
pub fn create_v1_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .merge(create_history_routes(state))
}

/// History routes; every endpoint requires an authenticated user.
fn create_history_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/history/watch",
            get(handlers::get_watch_history_handler)
                .delete(handlers::clear_watch_history_handler),
        )
        .route(
            "/history/watch/live",
            get(handlers::get_watching_now_handler),
        )
        .route(
            "/history/watch/{video_id}",
            post(handlers::update_watch_progress_handler)
                .delete(handlers::remove_watch_entry_handler),
        )
        .route(
            "/history/search",
            get(handlers::get_search_history_handler)
                .delete(handlers::clear_search_history_handler),
        )
        .route(
            "/history/search/{keyword}",
            post(handlers::add_search_keyword_handler)
                .delete(handlers::remove_search_keyword_handler),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
