//! Shared-credential session gate.
//!
//! One admin account from configuration. A successful login issues a random
//! bearer token that stays valid for the configured TTL; every candidate and
//! mindset route sits behind [`require_session`].

pub mod handlers;

use std::collections::HashMap;
use std::sync::RwLock;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: Uuid,
    pub expires_at: DateTime<Utc>,
}

/// Active sessions keyed by token.
pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<Uuid, DateTime<Utc>>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn issue(&self) -> Session {
        let session = Session {
            token: Uuid::new_v4(),
            expires_at: Utc::now() + self.ttl,
        };
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        // Expired tokens are only dropped when someone presents them; sweep on login.
        let now = Utc::now();
        sessions.retain(|_, expires_at| *expires_at > now);
        sessions.insert(session.token, session.expires_at);
        session
    }

    pub fn is_active(&self, token: &Uuid) -> bool {
        let expires_at = {
            let sessions = self.sessions.read().unwrap_or_else(|e| e.into_inner());
            match sessions.get(token) {
                Some(expires_at) => *expires_at,
                None => return false,
            }
        };

        if expires_at > Utc::now() {
            return true;
        }
        debug!("Session {token} expired");
        self.revoke(token);
        false
    }

    /// Returns whether the token was known.
    pub fn revoke(&self, token: &Uuid) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(token)
            .is_some()
    }
}

pub fn credentials_match(config: &Config, username: &str, password: &str) -> bool {
    username == config.admin_username && password == config.admin_password
}

/// Extracts the token from `Authorization: Bearer <uuid>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<Uuid> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    Uuid::parse_str(token.trim()).ok()
}

/// Route layer: rejects requests without a live session token.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers()).ok_or(AppError::Unauthorized)?;
    if !state.sessions.is_active(&token) {
        return Err(AppError::Unauthorized);
    }
    Ok(next.run(request).await)
}
