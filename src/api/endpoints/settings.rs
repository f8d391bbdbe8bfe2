//! `/settings` handlers

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::adapters::database::SettingsStore;
use crate::api::error::ApiError;
use crate::api::types::{AppState, MessageResponse};
use crate::core::mapper::settings::{fold_settings, settings_from_json};
use crate::domain::SettingsMap;

#[derive(Debug, Default, Deserialize)]
pub struct SettingsQuery {
    pub key: Option<String>,
}

/// `GET /settings[?key=]`
pub async fn get(
    State(state): State<AppState>,
    query: Result<Query<SettingsQuery>, QueryRejection>,
) -> Result<Json<SettingsMap>, ApiError> {
    let Query(query) = query?;
    let key = query.key.as_deref().filter(|k| !k.is_empty());

    let rows = state
        .store
        .list_settings(key)
        .await
        .map_err(ApiError::store("Error fetching settings"))?;

    Ok(Json(fold_settings(rows)))
}

/// `PUT /settings`
///
/// Each key is upserted independently; a failure part way leaves earlier
/// keys written.
pub async fn update(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(body) = body?;
    let Value::Object(map) = body else {
        return Err(ApiError::BadRequest(
            "Settings body must be a JSON object".to_string(),
        ));
    };

    let rows = settings_from_json(&map)?;
    for row in &rows {
        state
            .store
            .upsert_setting(row)
            .await
            .map_err(ApiError::store("Error updating settings"))?;
    }

    tracing::info!(count = rows.len(), "Settings updated");
    Ok(Json(MessageResponse::new("Settings updated successfully")))
}
