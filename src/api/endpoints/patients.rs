//! `/patients` handlers

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::database::PatientStore;
use crate::api::error::ApiError;
use crate::api::types::{AppState, MessageResponse, PatientCreated};
use crate::core::mapper::patient::{to_new_patient, to_patch, to_summary};
use crate::domain::{PatientId, PatientPayload, PatientRecord, PatientSummary};

/// `GET /patients`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PatientSummary>>, ApiError> {
    let records = state
        .store
        .list_patients()
        .await
        .map_err(ApiError::store("Error fetching patients from database"))?;

    Ok(Json(records.iter().map(to_summary).collect()))
}

/// `POST /patients`
///
/// Re-reads the inserted row so the response carries the store-assigned
/// creation timestamp.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<PatientPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<PatientCreated>), ApiError> {
    let Json(payload) = body?;
    let new_patient = to_new_patient(&payload)?;

    let id = state
        .store
        .insert_patient(&new_patient)
        .await
        .map_err(ApiError::store("Error adding patient to database"))?;

    let record = state
        .store
        .get_patient(id)
        .await
        .map_err(ApiError::store("Error adding patient to database"))?
        .unwrap_or_else(|| {
            tracing::warn!(patient_id = %id, "Inserted patient not found on read-back");
            PatientRecord {
                id,
                name: new_patient.name,
                phone: new_patient.phone,
                gender: new_patient.gender,
                dob: new_patient.dob,
                created_at: None,
            }
        });

    tracing::info!(patient_id = %id, "Patient created");

    Ok((
        StatusCode::CREATED,
        Json(PatientCreated {
            message: "Patient added successfully".to_string(),
            patient_id: id.value(),
            patient: record,
        }),
    ))
}

/// `PUT /patients/:id`
///
/// Only fields present in the body change. An unknown id is a silent success.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<PatientPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    let id = PatientId::new(id);
    let Json(payload) = body?;

    let patch = to_patch(&payload)?;
    if patch.is_empty() {
        return Err(ApiError::BadRequest("No fields to update".to_string()));
    }

    let existing = state
        .store
        .get_patient(id)
        .await
        .map_err(ApiError::store("Error updating patient in database"))?;

    match existing {
        Some(record) => {
            let updated = patch.apply_to(record);
            state
                .store
                .update_patient(&updated)
                .await
                .map_err(ApiError::store("Error updating patient in database"))?;
            tracing::info!(patient_id = %id, "Patient updated");
        }
        None => tracing::debug!(patient_id = %id, "Update for unknown patient ignored"),
    }

    Ok(Json(MessageResponse::new(format!(
        "Patient with ID {id} updated successfully"
    ))))
}

/// `DELETE /patients/:id`
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    let id = PatientId::new(id);

    let removed = state
        .store
        .delete_patient(id)
        .await
        .map_err(ApiError::store("Error deleting patient from database"))?;

    tracing::info!(patient_id = %id, removed, "Patient deleted");

    Ok(Json(MessageResponse::new(format!(
        "Patient with ID {id} deleted successfully"
    ))))
}
