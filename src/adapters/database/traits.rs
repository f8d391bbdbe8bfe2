//! Store abstraction traits
//!
//! This module defines the traits that store adapters must implement
//! to back the REST handlers. Each resource has its own trait; handlers
//! hold a single [`ClinicStore`] trait object that covers all three.

use crate::domain::{
    AppointmentFields, AppointmentId, AppointmentRecord, NewPatient, PatientId, PatientRecord,
    Result, SettingRow,
};
use async_trait::async_trait;

/// Patient persistence
#[async_trait]
pub trait PatientStore: Send + Sync {
    /// List every patient, ordered by id
    async fn list_patients(&self) -> Result<Vec<PatientRecord>>;

    /// Fetch one patient
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` when no row has this id.
    async fn get_patient(&self, id: PatientId) -> Result<Option<PatientRecord>>;

    /// Insert a patient and return the store-assigned id
    async fn insert_patient(&self, patient: &NewPatient) -> Result<PatientId>;

    /// Write every mutable column of `patient` over the row with the same id
    ///
    /// # Returns
    ///
    /// Returns the number of rows affected (0 when the id does not exist).
    async fn update_patient(&self, patient: &PatientRecord) -> Result<u64>;

    /// Delete a patient, returning the number of rows removed
    async fn delete_patient(&self, id: PatientId) -> Result<u64>;
}

/// Appointment persistence
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// List every appointment ordered by date, then time, then id, with
    /// undated rows last
    async fn list_appointments(&self) -> Result<Vec<AppointmentRecord>>;

    /// Insert an appointment and return the store-assigned id
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::InvalidReference` when `patient_id` names no patient.
    async fn insert_appointment(&self, fields: &AppointmentFields) -> Result<AppointmentId>;

    /// Overwrite every mutable column of an appointment
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::InvalidReference` when `patient_id` names no patient.
    async fn overwrite_appointment(
        &self,
        id: AppointmentId,
        fields: &AppointmentFields,
    ) -> Result<u64>;

    /// Delete an appointment, returning the number of rows removed
    async fn delete_appointment(&self, id: AppointmentId) -> Result<u64>;
}

/// Settings persistence
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// List settings rows, optionally restricted to one key
    async fn list_settings(&self, key: Option<&str>) -> Result<Vec<SettingRow>>;

    /// Returns `true` when a row exists for `key`
    async fn setting_exists(&self, key: &str) -> Result<bool>;

    /// Update the value of an existing row
    async fn update_setting(&self, row: &SettingRow) -> Result<u64>;

    /// Insert a new row
    async fn insert_setting(&self, row: &SettingRow) -> Result<()>;

    /// Read-then-write upsert of one setting
    ///
    /// Not atomic: two concurrent upserts of a new key can race, and the
    /// loser fails on the primary key.
    async fn upsert_setting(&self, row: &SettingRow) -> Result<()> {
        if self.setting_exists(&row.key).await? {
            tracing::debug!(key = %row.key, "Updating existing setting");
            self.update_setting(row).await?;
        } else {
            tracing::debug!(key = %row.key, "Inserting new setting");
            self.insert_setting(row).await?;
        }
        Ok(())
    }
}

/// Everything the HTTP layer needs from a store
#[async_trait]
pub trait ClinicStore: PatientStore + AppointmentStore + SettingsStore {
    /// Test the store connection
    ///
    /// # Errors
    ///
    /// Returns an error if the connection test fails.
    async fn test_connection(&self) -> Result<()>;

    /// Create tables and indexes if they do not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be applied.
    async fn ensure_schema(&self) -> Result<()>;

    /// Short backend name for logs and health output
    fn backend_name(&self) -> &'static str;
}
