//! Shared helpers for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use myclinic::adapters::sqlite::SqliteAdapter;
use myclinic::api::{build_router, AppState};
use myclinic::config::{AuthConfig, ServerConfig};
use serde_json::Value;
use tower::ServiceExt;

/// Router over a fresh in-memory store, sessions off
pub fn app() -> Router {
    app_with_auth(AuthConfig::default())
}

/// Router over a fresh in-memory store with the given auth settings
pub fn app_with_auth(auth: AuthConfig) -> Router {
    app_with_store(auth).0
}

/// Router plus a handle on its store, for tests that tamper with the tables
pub fn app_with_store(auth: AuthConfig) -> (Router, Arc<SqliteAdapter>) {
    let store = Arc::new(SqliteAdapter::in_memory().expect("in-memory store"));
    let router = build_router(AppState::new(store.clone(), &auth), &ServerConfig::default());
    (router, store)
}

/// Sends one request and returns the status with the parsed JSON body
/// (`Value::Null` for an empty or non-JSON body)
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body), None).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None, None).await
}
