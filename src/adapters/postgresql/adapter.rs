//! PostgreSQL adapter implementing the store traits

use crate::adapters::database::traits::{
    AppointmentStore, ClinicStore, PatientStore, SettingsStore,
};
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::domain::{
    AppointmentFields, AppointmentId, AppointmentRecord, ClinicError, Gender, NewPatient,
    PatientId, PatientRecord, Result, SettingRow,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;
use tokio_postgres::Row;

const PATIENT_COLUMNS: &str = "id, name, phone, gender, dob, created_at";
const APPOINTMENT_COLUMNS: &str =
    "id, patient_name, appointment_date, appointment_time, reason, status, patient_id";

/// PostgreSQL implementation of the store traits
///
/// This wraps the PostgreSQLClient and implements [`ClinicStore`].
pub struct PostgreSQLAdapter {
    client: Arc<PostgreSQLClient>,
}

impl PostgreSQLAdapter {
    /// Create a new PostgreSQL adapter
    pub fn new(client: PostgreSQLClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Arc<PostgreSQLClient> {
        &self.client
    }
}

fn column<'a, T>(row: &'a Row, name: &str) -> Result<T>
where
    T: tokio_postgres::types::FromSql<'a>,
{
    row.try_get(name)
        .map_err(|e| ClinicError::Database(format!("Failed to read column '{name}': {e}")))
}

fn patient_from_row(row: &Row) -> Result<PatientRecord> {
    let gender: String = column(row, "gender")?;
    Ok(PatientRecord {
        id: PatientId::new(column(row, "id")?),
        name: column(row, "name")?,
        phone: column(row, "phone")?,
        gender: Gender::parse_or_default(Some(gender.as_str())),
        dob: column::<Option<NaiveDate>>(row, "dob")?,
        created_at: column::<Option<DateTime<Utc>>>(row, "created_at")?,
    })
}

fn appointment_from_row(row: &Row) -> Result<AppointmentRecord> {
    Ok(AppointmentRecord {
        id: AppointmentId::new(column(row, "id")?),
        fields: AppointmentFields {
            patient_name: column(row, "patient_name")?,
            appointment_date: column(row, "appointment_date")?,
            appointment_time: column(row, "appointment_time")?,
            reason: column(row, "reason")?,
            status: column(row, "status")?,
            patient_id: column::<Option<i64>>(row, "patient_id")?.map(PatientId::new),
        },
    })
}

#[async_trait]
impl PatientStore for PostgreSQLAdapter {
    async fn list_patients(&self) -> Result<Vec<PatientRecord>> {
        let query = format!("SELECT {PATIENT_COLUMNS} FROM patients ORDER BY id");
        let rows = self.client.query(&query, &[]).await?;
        rows.iter().map(patient_from_row).collect()
    }

    async fn get_patient(&self, id: PatientId) -> Result<Option<PatientRecord>> {
        let query = format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE id = $1");
        let rows = self.client.query(&query, &[&id.value()]).await?;
        rows.first().map(patient_from_row).transpose()
    }

    async fn insert_patient(&self, patient: &NewPatient) -> Result<PatientId> {
        let row = self
            .client
            .query_one(
                "INSERT INTO patients (name, phone, gender, dob) VALUES ($1, $2, $3, $4) RETURNING id",
                &[
                    &patient.name,
                    &patient.phone,
                    &patient.gender.as_str(),
                    &patient.dob,
                ],
            )
            .await?;

        let id = PatientId::new(column(&row, "id")?);
        tracing::debug!(patient_id = %id, "Inserted patient into PostgreSQL");
        Ok(id)
    }

    async fn update_patient(&self, patient: &PatientRecord) -> Result<u64> {
        self.client
            .execute(
                "UPDATE patients SET name = $1, phone = $2, gender = $3, dob = $4 WHERE id = $5",
                &[
                    &patient.name,
                    &patient.phone,
                    &patient.gender.as_str(),
                    &patient.dob,
                    &patient.id.value(),
                ],
            )
            .await
    }

    async fn delete_patient(&self, id: PatientId) -> Result<u64> {
        self.client
            .execute("DELETE FROM patients WHERE id = $1", &[&id.value()])
            .await
    }
}

#[async_trait]
impl AppointmentStore for PostgreSQLAdapter {
    async fn list_appointments(&self) -> Result<Vec<AppointmentRecord>> {
        let query = format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments \
             ORDER BY appointment_date ASC NULLS LAST, appointment_time ASC NULLS LAST, id ASC"
        );
        let rows = self.client.query(&query, &[]).await?;
        rows.iter().map(appointment_from_row).collect()
    }

    async fn insert_appointment(&self, fields: &AppointmentFields) -> Result<AppointmentId> {
        let patient_id = fields.patient_id.map(|p| p.value());
        let row = self
            .client
            .query_one(
                "INSERT INTO appointments \
                 (patient_name, appointment_date, appointment_time, reason, status, patient_id) \
                 VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
                &[
                    &fields.patient_name,
                    &fields.appointment_date,
                    &fields.appointment_time,
                    &fields.reason,
                    &fields.status,
                    &patient_id,
                ],
            )
            .await?;

        Ok(AppointmentId::new(column(&row, "id")?))
    }

    async fn overwrite_appointment(
        &self,
        id: AppointmentId,
        fields: &AppointmentFields,
    ) -> Result<u64> {
        let patient_id = fields.patient_id.map(|p| p.value());
        self.client
            .execute(
                "UPDATE appointments SET patient_name = $1, appointment_date = $2, \
                 appointment_time = $3, reason = $4, status = $5, patient_id = $6 WHERE id = $7",
                &[
                    &fields.patient_name,
                    &fields.appointment_date,
                    &fields.appointment_time,
                    &fields.reason,
                    &fields.status,
                    &patient_id,
                    &id.value(),
                ],
            )
            .await
    }

    async fn delete_appointment(&self, id: AppointmentId) -> Result<u64> {
        self.client
            .execute("DELETE FROM appointments WHERE id = $1", &[&id.value()])
            .await
    }
}

#[async_trait]
impl SettingsStore for PostgreSQLAdapter {
    async fn list_settings(&self, key: Option<&str>) -> Result<Vec<SettingRow>> {
        let rows = match key {
            Some(key) => {
                self.client
                    .query(
                        "SELECT setting_key, setting_value FROM settings WHERE setting_key = $1",
                        &[&key],
                    )
                    .await?
            }
            None => {
                self.client
                    .query(
                        "SELECT setting_key, setting_value FROM settings ORDER BY setting_key",
                        &[],
                    )
                    .await?
            }
        };

        rows.iter()
            .map(|row| {
                let value: Option<String> = column(row, "setting_value")?;
                Ok(SettingRow::new(
                    column::<String>(row, "setting_key")?,
                    value.unwrap_or_default(),
                ))
            })
            .collect()
    }

    async fn setting_exists(&self, key: &str) -> Result<bool> {
        let rows = self
            .client
            .query("SELECT 1 FROM settings WHERE setting_key = $1", &[&key])
            .await?;
        Ok(!rows.is_empty())
    }

    async fn update_setting(&self, row: &SettingRow) -> Result<u64> {
        self.client
            .execute(
                "UPDATE settings SET setting_value = $1 WHERE setting_key = $2",
                &[&row.value, &row.key],
            )
            .await
    }

    async fn insert_setting(&self, row: &SettingRow) -> Result<()> {
        self.client
            .execute(
                "INSERT INTO settings (setting_key, setting_value) VALUES ($1, $2)",
                &[&row.key, &row.value],
            )
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ClinicStore for PostgreSQLAdapter {
    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection().await
    }

    async fn ensure_schema(&self) -> Result<()> {
        self.client.ensure_schema().await
    }

    fn backend_name(&self) -> &'static str {
        "postgresql"
    }
}
