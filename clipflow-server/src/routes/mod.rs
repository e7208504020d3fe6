pub mod v1;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::infra::app_state::AppState;

/// Create the main API router with all versions and shared layers.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", v1::create_v1_router(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
