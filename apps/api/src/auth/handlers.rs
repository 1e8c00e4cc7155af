use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use serde::Deserialize;
use tracing::{info, warn};

use crate::auth::{bearer_token, credentials_match, Session};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Session>, AppError> {
    if !credentials_match(&state.config, &req.username, &req.password) {
        warn!("Failed login for user '{}'", req.username);
        return Err(AppError::InvalidCredentials);
    }

    let session = state.sessions.issue();
    info!("User '{}' logged in", req.username);
    Ok(Json(session))
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let token = bearer_token(&headers).ok_or(AppError::Unauthorized)?;
    state.sessions.revoke(&token);
    Ok(StatusCode::NO_CONTENT)
}
