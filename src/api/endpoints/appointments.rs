//! `/appointments` handlers

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::database::AppointmentStore;
use crate::api::error::ApiError;
use crate::api::types::{AppState, AppointmentCreated, MessageResponse};
use crate::core::mapper::appointment::{to_new_fields, to_overwrite_fields, to_view};
use crate::domain::{AppointmentId, AppointmentPayload, AppointmentView};

/// `GET /appointments`, ordered by date then time
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<AppointmentView>>, ApiError> {
    let records = state
        .store
        .list_appointments()
        .await
        .map_err(ApiError::store("Error fetching appointments"))?;

    Ok(Json(records.iter().map(to_view).collect()))
}

/// `POST /appointments`
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<AppointmentPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<AppointmentCreated>), ApiError> {
    let Json(payload) = body?;
    let fields = to_new_fields(&payload)?;

    let id = state
        .store
        .insert_appointment(&fields)
        .await
        .map_err(ApiError::store("Error creating appointment"))?;

    tracing::info!(appointment_id = %id, "Appointment created");

    Ok((
        StatusCode::CREATED,
        Json(AppointmentCreated {
            message: "Appointment created successfully".to_string(),
            appointment_id: id,
        }),
    ))
}

/// `PUT /appointments/:id`
///
/// Overwrites every mutable column; fields missing from the body become `NULL`.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<AppointmentPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    let id = AppointmentId::new(id);
    let Json(payload) = body?;
    let fields = to_overwrite_fields(&payload)?;

    let updated = state
        .store
        .overwrite_appointment(id, &fields)
        .await
        .map_err(ApiError::store("Error updating appointment"))?;

    tracing::info!(appointment_id = %id, updated, "Appointment overwritten");

    Ok(Json(MessageResponse::new(format!(
        "Appointment {id} updated successfully"
    ))))
}

/// `DELETE /appointments/:id`
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    let id = AppointmentId::new(id);

    let removed = state
        .store
        .delete_appointment(id)
        .await
        .map_err(ApiError::store("Error deleting appointment"))?;

    tracing::info!(appointment_id = %id, removed, "Appointment deleted");

    Ok(Json(MessageResponse::new(format!(
        "Appointment {id} deleted successfully"
    ))))
}
