//! Shared handler state and response bodies

use std::sync::Arc;

use chrono::Duration;
use serde::Serialize;

use crate::adapters::database::ClinicStore;
use crate::config::AuthConfig;
use crate::core::auth::{CredentialVerifier, SessionStore, StaticCredentialVerifier};
use crate::domain::{AppointmentId, PatientRecord};

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ClinicStore>,
    pub sessions: Arc<SessionStore>,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub require_session: bool,
}

impl AppState {
    /// Builds handler state from a store and the auth section of the configuration
    pub fn new(store: Arc<dyn ClinicStore>, auth: &AuthConfig) -> Self {
        Self {
            store,
            sessions: Arc::new(SessionStore::new(Duration::minutes(auth.session_ttl_minutes))),
            verifier: Arc::new(StaticCredentialVerifier::new(
                auth.username.clone(),
                auth.password.clone(),
            )),
            require_session: auth.require_session,
        }
    }
}

/// Plain confirmation body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `POST /patients` success body, carrying the stored row as inserted
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientCreated {
    pub message: String,
    pub patient_id: i64,
    pub patient: PatientRecord,
}

/// `POST /appointments` success body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentCreated {
    pub message: String,
    pub appointment_id: AppointmentId,
}
