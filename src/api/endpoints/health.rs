//! Liveness and store health

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::adapters::database::ClinicStore;
use crate::api::error::ApiError;
use crate::api::types::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// `GET /`
pub async fn root() -> &'static str {
    "MyClinic Backend is running!"
}

/// `GET /health` pings the store
pub async fn check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state
        .store
        .test_connection()
        .await
        .map_err(ApiError::Unavailable)?;

    Ok(Json(HealthResponse {
        status: "ok",
        database: state.store.backend_name(),
        version: env!("CARGO_PKG_VERSION"),
    }))
}
