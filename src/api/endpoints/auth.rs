//! Login, logout and session lookup

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::middleware::auth::{bearer_token, current_session};
use crate::api::types::{AppState, MessageResponse};

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

/// `POST /auth/login`
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = body?;

    let username = request.username.as_deref().map(str::trim).unwrap_or_default();
    let password = request.password.as_deref().unwrap_or_default();
    if username.is_empty() || password.is_empty() {
        return Err(ApiError::BadRequest(
            "Username and password are required".to_string(),
        ));
    }

    if !state.verifier.verify(username, password) {
        tracing::warn!(username, "Login rejected");
        return Err(ApiError::InvalidCredentials);
    }

    let issued = state.sessions.open(username)?;
    tracing::info!(username, expires_at = %issued.session.expires_at, "Session opened");

    Ok(Json(LoginResponse {
        token: issued.token,
        username: issued.session.username,
        expires_at: issued.session.expires_at,
    }))
}

/// `POST /auth/logout`
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, ApiError> {
    let token = bearer_token(&headers).ok_or(ApiError::Unauthorized)?;
    if !state.sessions.revoke(token)? {
        return Err(ApiError::Unauthorized);
    }

    tracing::info!("Session closed");
    Ok(Json(MessageResponse::new("Logged out successfully")))
}

/// `GET /auth/session`
pub async fn session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = current_session(&state, &headers)?;
    Ok(Json(SessionResponse {
        username: session.username,
        expires_at: session.expires_at,
    }))
}
