//! Bearer session middleware
//!
//! Mounted on the resource routes only when `auth.require_session` is set.
//! Reads `AppState` from request extensions (injected as the outermost
//! layer) and injects the validated [`Session`] for downstream handlers.

use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::api::error::ApiError;
use crate::api::types::AppState;
use crate::core::auth::Session;

/// Extracts the token from `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Resolves the live session named by the request's bearer token
pub fn current_session(state: &AppState, headers: &HeaderMap) -> Result<Session, ApiError> {
    let token = bearer_token(headers).ok_or(ApiError::Unauthorized)?;
    state.sessions.validate(token).ok_or(ApiError::Unauthorized)
}

/// Rejects requests without a live session
pub async fn require_session(req: Request<axum::body::Body>, next: Next) -> Response {
    match require_session_inner(req, next).await {
        Ok(resp) => resp,
        Err(err) => err.into_response(),
    }
}

async fn require_session_inner(
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let state = req
        .extensions()
        .get::<AppState>()
        .cloned()
        .ok_or(ApiError::Unauthorized)?;

    let session = current_session(&state, req.headers()).map_err(|e| {
        tracing::debug!(path = %req.uri().path(), "Rejected request without a valid session");
        e
    })?;

    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}
