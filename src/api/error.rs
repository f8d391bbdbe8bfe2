//! API error types with JSON envelopes
//!
//! Every failure body is `{message}` for client errors and
//! `{message, error}` for store failures.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::ClinicError;
use crate::log_error_with_context;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// API-level errors with HTTP status mapping
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or malformed client input
    #[error("{0}")]
    BadRequest(String),

    /// Missing, unknown or expired bearer token
    #[error("Authentication required")]
    Unauthorized,

    /// Login with a wrong username or password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Store failure caught at the handler boundary
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        source: ClinicError,
    },

    /// Store unreachable while answering a health probe
    #[error("Database unavailable: {0}")]
    Unavailable(ClinicError),
}

impl ApiError {
    /// Wraps a store error with the handler's message
    ///
    /// ```rust
    /// use myclinic::api::error::ApiError;
    /// use myclinic::domain::ClinicError;
    ///
    /// let result: Result<(), ClinicError> = Err(ClinicError::Database("boom".into()));
    /// let err = result.map_err(ApiError::store("Error fetching settings")).unwrap_err();
    /// assert!(err.to_string().starts_with("Error fetching settings"));
    /// ```
    pub fn store(context: &'static str) -> impl FnOnce(ClinicError) -> ApiError {
        move |source| ApiError::Store { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message, None),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Authentication required".to_string(),
                None,
            ),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid username or password".to_string(),
                None,
            ),
            ApiError::Store {
                source: ClinicError::InvalidReference(detail),
                ..
            } => (
                StatusCode::BAD_REQUEST,
                format!("Invalid patient_id: {detail}"),
                None,
            ),
            ApiError::Store {
                source: ClinicError::Validation(message),
                ..
            } => (StatusCode::BAD_REQUEST, message, None),
            ApiError::Store { context, source } => {
                if source.is_store_failure() {
                    log_error_with_context!(&source, context);
                } else {
                    tracing::warn!(error = %source, context, "Request failed");
                }
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    context.to_string(),
                    Some(source.to_string()),
                )
            }
            ApiError::Unavailable(source) => {
                tracing::warn!(error = %source, "Health check failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Database unavailable".to_string(),
                    Some(source.to_string()),
                )
            }
        };

        (status, Json(ErrorBody { message, error })).into_response()
    }
}

/// Mapper failures are client errors; anything else is unexpected here
impl From<ClinicError> for ApiError {
    fn from(err: ClinicError) -> Self {
        match err {
            ClinicError::Validation(message) => ApiError::BadRequest(message),
            other => ApiError::Store {
                context: "Internal error",
                source: other,
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(format!("Invalid ID: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 4096).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_bad_request_returns_400_with_message_only() {
        let response = ApiError::BadRequest("Name and Phone are required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Name and Phone are required");
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn test_store_failure_returns_500_with_detail() {
        let response = ApiError::Store {
            context: "Error fetching appointments",
            source: ClinicError::Database("connection reset".into()),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Error fetching appointments");
        assert_eq!(json["error"], "Database error: connection reset");
    }

    #[tokio::test]
    async fn test_invalid_reference_returns_400() {
        let response = ApiError::Store {
            context: "Error creating appointment",
            source: ClinicError::InvalidReference("patient 9 not found".into()),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unauthorized_returns_401() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Authentication required");
    }

    #[tokio::test]
    async fn test_unavailable_returns_503() {
        let response =
            ApiError::Unavailable(ClinicError::Connection("refused".into())).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_validation_error_becomes_bad_request() {
        let err: ApiError = ClinicError::Validation("No fields to update".into()).into();
        assert!(matches!(err, ApiError::BadRequest(m) if m == "No fields to update"));
    }
}
