//! Bearer-token guard for the `/api` routes.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use super::error::AppError;
use super::state::AppState;

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
}

/// Reject requests whose bearer token does not match the configured one.
///
/// Passes everything through when no token is configured.
pub async fn require_api_token(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(expected) = state.api_token.as_deref() {
        match bearer_token(&req) {
            Some(token) if token == expected => {}
            Some(_) => {
                tracing::warn!("rejected request to {} with invalid token", req.uri().path());
                return Err(AppError::Unauthorized("Invalid bearer token".to_string()));
            }
            None => return Err(AppError::Unauthorized("Missing bearer token".to_string())),
        }
    }

    Ok(next.run(req).await)
}
