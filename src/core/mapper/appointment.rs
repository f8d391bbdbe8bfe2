//! Appointment mapping
//!
//! Reads pass every column through, rendering the date as ISO `YYYY-MM-DD`.
//! Writes come in two flavours: create fills defaults for status and reason,
//! while update overwrites every mutable column, storing `NULL` for whatever
//! the body omits.

use super::{format_iso_date, non_blank, parse_iso_date};
use crate::domain::{
    AppointmentFields, AppointmentPayload, AppointmentRecord, AppointmentStatus, AppointmentView,
    ClinicError, PatientId, PatientRef, Result,
};

/// Maps a stored appointment row to its list representation
pub fn to_view(record: &AppointmentRecord) -> AppointmentView {
    let fields = &record.fields;
    AppointmentView {
        id: record.id,
        patient_name: fields.patient_name.clone(),
        appointment_date: fields.appointment_date.map(format_iso_date),
        appointment_time: fields.appointment_time.clone(),
        reason: fields.reason.clone(),
        status: fields.status.clone(),
        patient_id: fields.patient_id,
    }
}

/// Resolves a client-supplied patient reference
///
/// An empty string and an explicit `null` both mean "no patient".
///
/// # Errors
///
/// Returns `ClinicError::Validation` when the reference is not a positive integer.
pub fn resolve_patient_ref(reference: Option<&PatientRef>) -> Result<Option<PatientId>> {
    let id = match reference {
        None => return Ok(None),
        Some(PatientRef::Number(n)) => *n,
        Some(PatientRef::Text(text)) => match non_blank(Some(text)) {
            None => return Ok(None),
            Some(text) => text.parse::<i64>().map_err(|_| {
                ClinicError::Validation(format!("Invalid patient_id '{text}'"))
            })?,
        },
    };

    if id <= 0 {
        return Err(ClinicError::Validation(format!("Invalid patient_id '{id}'")));
    }
    Ok(Some(PatientId::new(id)))
}

fn parse_status(value: &str) -> Result<String> {
    value
        .parse::<AppointmentStatus>()
        .map(|status| status.as_str().to_string())
        .map_err(ClinicError::Validation)
}

fn parse_date(value: Option<&str>) -> Result<Option<chrono::NaiveDate>> {
    non_blank(value)
        .map(|date| parse_iso_date("appointment_date", date))
        .transpose()
}

/// Maps a create payload to the columns to insert
///
/// # Errors
///
/// Returns `ClinicError::Validation` when the patient name, date or time is
/// missing, or when any supplied value fails to parse.
pub fn to_new_fields(payload: &AppointmentPayload) -> Result<AppointmentFields> {
    let patient_name = non_blank(payload.patient_name.as_deref());
    let date = non_blank(payload.appointment_date.as_deref());
    let time = non_blank(payload.appointment_time.as_deref());

    let (Some(patient_name), Some(date), Some(time)) = (patient_name, date, time) else {
        return Err(ClinicError::Validation(
            "Patient name, appointment date, and time are required".to_string(),
        ));
    };

    let status = match non_blank(payload.status.as_deref()) {
        Some(status) => parse_status(status)?,
        None => AppointmentStatus::default().as_str().to_string(),
    };

    Ok(AppointmentFields {
        patient_name: Some(patient_name.to_string()),
        appointment_date: Some(parse_iso_date("appointment_date", date)?),
        appointment_time: Some(time.to_string()),
        reason: non_blank(payload.reason.as_deref()).map(str::to_string),
        status: Some(status),
        patient_id: resolve_patient_ref(payload.patient_id.as_ref().and_then(Option::as_ref))?,
    })
}

/// Maps an update payload to the full set of columns to overwrite
///
/// Every mutable column is replaced: fields missing from the body become
/// `None` and are stored as `NULL`.
///
/// # Errors
///
/// Returns `ClinicError::Validation` when the body names no field, or when
/// any supplied value fails to parse.
pub fn to_overwrite_fields(payload: &AppointmentPayload) -> Result<AppointmentFields> {
    if payload.is_blank() {
        return Err(ClinicError::Validation(
            "No fields provided for update.".to_string(),
        ));
    }

    Ok(AppointmentFields {
        patient_name: non_blank(payload.patient_name.as_deref()).map(str::to_string),
        appointment_date: parse_date(payload.appointment_date.as_deref())?,
        appointment_time: non_blank(payload.appointment_time.as_deref()).map(str::to_string),
        reason: non_blank(payload.reason.as_deref()).map(str::to_string),
        status: non_blank(payload.status.as_deref())
            .map(parse_status)
            .transpose()?,
        patient_id: resolve_patient_ref(payload.patient_id.as_ref().and_then(Option::as_ref))?,
    })
}
