use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use super::jwt::validate_token;
use crate::errors::AppError;
use crate::infra::app_state::AppState;

/// Resolve the bearer token to a user and attach it to the request.
///
/// Handlers downstream take `Extension<User>`; the user id is then passed
/// explicitly into every service call.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(&request)?;

    let claims = validate_token(state.config.jwt_secret.as_bytes(), &token)
        .map_err(|e| AppError::unauthorized("Invalid token").with_detail(e.to_string()))?;

    let user = state
        .unit_of_work
        .users
        .get_user_by_id(claims.sub)
        .await?
        .ok_or_else(|| AppError::unauthorized("Unknown user"))?;

    if !user.is_active {
        return Err(AppError::unauthorized("Account disabled"));
    }

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

fn extract_bearer_token(request: &Request) -> Result<String, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::to_string)
        .ok_or_else(|| AppError::unauthorized("Authentication required"))
}
