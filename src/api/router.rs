//! HTTP router
//!
//! Resource routes (`/patients`, `/appointments`, `/settings`) are mounted
//! at the root. When sessions are required they sit behind the bearer
//! middleware; `/`, `/health` and `/auth/*` never do.
//!
//! Layers (outermost → innermost): CORS → trace → timeout → routes.

use std::time::Duration;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::AppState;
use crate::config::ServerConfig;

/// Builds the full application router
///
/// Path params use `:param` syntax (axum 0.7).
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let mut resources = Router::new()
        .route(
            "/patients",
            get(endpoints::patients::list).post(endpoints::patients::create),
        )
        .route(
            "/patients/:id",
            axum::routing::put(endpoints::patients::update).delete(endpoints::patients::delete),
        )
        .route(
            "/appointments",
            get(endpoints::appointments::list).post(endpoints::appointments::create),
        )
        .route(
            "/appointments/:id",
            axum::routing::put(endpoints::appointments::update)
                .delete(endpoints::appointments::delete),
        )
        .route(
            "/settings",
            get(endpoints::settings::get).put(endpoints::settings::update),
        )
        .with_state(state.clone());

    if state.require_session {
        // Extension must be outermost so the middleware can read AppState.
        // route_layer keeps unmatched paths on the 404 fallback.
        resources = resources
            .route_layer(axum::middleware::from_fn(middleware::auth::require_session))
            .route_layer(axum::Extension(state.clone()));
    }

    let public = Router::new()
        .route("/", get(endpoints::health::root))
        .route("/health", get(endpoints::health::check))
        .route("/auth/login", post(endpoints::auth::login))
        .route("/auth/logout", post(endpoints::auth::logout))
        .route("/auth/session", get(endpoints::auth::session))
        .with_state(state);

    Router::new()
        .merge(public)
        .merge(resources)
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_seconds,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&server.cors_allowed_origins))
}

/// CORS policy from the configured origins; `"*"` allows any origin
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::SqliteAdapter;
    use crate::config::AuthConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_router(require_session: bool) -> Router {
        let store = Arc::new(SqliteAdapter::in_memory().unwrap());
        let auth = AuthConfig {
            require_session,
            ..AuthConfig::default()
        };
        build_router(AppState::new(store, &auth), &ServerConfig::default())
    }

    #[tokio::test]
    async fn test_root_banner() {
        let response = test_router(false)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"MyClinic Backend is running!");
    }

    #[tokio::test]
    async fn test_health_reports_backend() {
        let response = test_router(false)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["database"], "sqlite");
    }

    #[tokio::test]
    async fn test_resources_open_by_default() {
        let response = test_router(false)
            .oneshot(Request::get("/patients").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_resources_require_session_when_enabled() {
        let response = test_router(true)
            .oneshot(Request::get("/patients").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_health_stays_public_when_sessions_required() {
        let response = test_router(true)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = test_router(false)
            .oneshot(Request::get("/api/patients").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404_when_sessions_required() {
        let response = test_router(true)
            .oneshot(Request::get("/api/patients").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_cors_layer_accepts_origin_list() {
        let _ = cors_layer(&["http://localhost:3000".to_string()]);
        let _ = cors_layer(&["*".to_string()]);
    }
}
