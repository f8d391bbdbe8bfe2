//! SQLite adapter implementing the store traits

use crate::adapters::database::traits::{
    AppointmentStore, ClinicStore, PatientStore, SettingsStore,
};
use crate::adapters::sqlite::client::SqliteClient;
use crate::domain::{
    AppointmentFields, AppointmentId, AppointmentRecord, Gender, NewPatient, PatientId,
    PatientRecord, Result, SettingRow,
};
use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;

const SELECT_PATIENTS: &str = "SELECT id, name, phone, gender, dob, created_at FROM patients";
const SELECT_APPOINTMENTS: &str = "SELECT id, patient_name, appointment_date, appointment_time, \
     reason, status, patient_id FROM appointments";

/// SQLite implementation of the store traits
pub struct SqliteAdapter {
    client: Arc<SqliteClient>,
}

impl SqliteAdapter {
    /// Create a new SQLite adapter
    pub fn new(client: SqliteClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// In-memory store with the schema applied (for testing)
    pub fn in_memory() -> Result<Self> {
        Ok(Self::new(SqliteClient::open_in_memory()?))
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Arc<SqliteClient> {
        &self.client
    }
}

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<PatientRecord> {
    let gender: String = row.get(3)?;
    Ok(PatientRecord {
        id: PatientId::new(row.get(0)?),
        name: row.get(1)?,
        phone: row.get(2)?,
        gender: Gender::parse_or_default(Some(gender.as_str())),
        dob: row.get(4)?,
        created_at: row.get(5)?,
    })
}

fn appointment_from_row(row: &Row<'_>) -> rusqlite::Result<AppointmentRecord> {
    Ok(AppointmentRecord {
        id: AppointmentId::new(row.get(0)?),
        fields: AppointmentFields {
            patient_name: row.get(1)?,
            appointment_date: row.get(2)?,
            appointment_time: row.get(3)?,
            reason: row.get(4)?,
            status: row.get(5)?,
            patient_id: row.get::<_, Option<i64>>(6)?.map(PatientId::new),
        },
    })
}

#[async_trait]
impl PatientStore for SqliteAdapter {
    async fn list_patients(&self) -> Result<Vec<PatientRecord>> {
        self.client.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_PATIENTS} ORDER BY id"))?;
            let rows = stmt.query_map([], patient_from_row)?;
            rows.collect()
        })
    }

    async fn get_patient(&self, id: PatientId) -> Result<Option<PatientRecord>> {
        self.client.with_conn(|conn| {
            conn.query_row(
                &format!("{SELECT_PATIENTS} WHERE id = ?1"),
                [id.value()],
                patient_from_row,
            )
            .optional()
        })
    }

    async fn insert_patient(&self, patient: &NewPatient) -> Result<PatientId> {
        let id = self.client.with_conn(|conn| {
            conn.execute(
                "INSERT INTO patients (name, phone, gender, dob) VALUES (?1, ?2, ?3, ?4)",
                params![patient.name, patient.phone, patient.gender.as_str(), patient.dob],
            )?;
            Ok(conn.last_insert_rowid())
        })?;

        tracing::debug!(patient_id = id, "Inserted patient into SQLite");
        Ok(PatientId::new(id))
    }

    async fn update_patient(&self, patient: &PatientRecord) -> Result<u64> {
        self.client.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE patients SET name = ?2, phone = ?3, gender = ?4, dob = ?5 WHERE id = ?1",
                params![
                    patient.id.value(),
                    patient.name,
                    patient.phone,
                    patient.gender.as_str(),
                    patient.dob
                ],
            )?;
            Ok(changed as u64)
        })
    }

    async fn delete_patient(&self, id: PatientId) -> Result<u64> {
        self.client.with_conn(|conn| {
            let changed = conn.execute("DELETE FROM patients WHERE id = ?1", [id.value()])?;
            Ok(changed as u64)
        })
    }
}

#[async_trait]
impl AppointmentStore for SqliteAdapter {
    async fn list_appointments(&self) -> Result<Vec<AppointmentRecord>> {
        self.client.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "{SELECT_APPOINTMENTS} ORDER BY appointment_date ASC NULLS LAST, \
                 appointment_time ASC NULLS LAST, id ASC"
            ))?;
            let rows = stmt.query_map([], appointment_from_row)?;
            rows.collect()
        })
    }

    async fn insert_appointment(&self, fields: &AppointmentFields) -> Result<AppointmentId> {
        let id = self.client.with_conn(|conn| {
            conn.execute(
                "INSERT INTO appointments \
                 (patient_name, appointment_date, appointment_time, reason, status, patient_id) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    fields.patient_name,
                    fields.appointment_date,
                    fields.appointment_time,
                    fields.reason,
                    fields.status,
                    fields.patient_id.map(|p| p.value()),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })?;

        Ok(AppointmentId::new(id))
    }

    async fn overwrite_appointment(
        &self,
        id: AppointmentId,
        fields: &AppointmentFields,
    ) -> Result<u64> {
        self.client.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE appointments SET patient_name = ?2, appointment_date = ?3, \
                 appointment_time = ?4, reason = ?5, status = ?6, patient_id = ?7 WHERE id = ?1",
                params![
                    id.value(),
                    fields.patient_name,
                    fields.appointment_date,
                    fields.appointment_time,
                    fields.reason,
                    fields.status,
                    fields.patient_id.map(|p| p.value()),
                ],
            )?;
            Ok(changed as u64)
        })
    }

    async fn delete_appointment(&self, id: AppointmentId) -> Result<u64> {
        self.client.with_conn(|conn| {
            let changed = conn.execute("DELETE FROM appointments WHERE id = ?1", [id.value()])?;
            Ok(changed as u64)
        })
    }
}

#[async_trait]
impl SettingsStore for SqliteAdapter {
    async fn list_settings(&self, key: Option<&str>) -> Result<Vec<SettingRow>> {
        self.client.with_conn(|conn| {
            let map_row = |row: &Row<'_>| -> rusqlite::Result<SettingRow> {
                let value: Option<String> = row.get(1)?;
                Ok(SettingRow::new(row.get::<_, String>(0)?, value.unwrap_or_default()))
            };

            match key {
                Some(key) => {
                    let mut stmt = conn.prepare(
                        "SELECT setting_key, setting_value FROM settings WHERE setting_key = ?1",
                    )?;
                    let rows = stmt.query_map([key], map_row)?;
                    rows.collect()
                }
                None => {
                    let mut stmt = conn.prepare(
                        "SELECT setting_key, setting_value FROM settings ORDER BY setting_key",
                    )?;
                    let rows = stmt.query_map([], map_row)?;
                    rows.collect()
                }
            }
        })
    }

    async fn setting_exists(&self, key: &str) -> Result<bool> {
        self.client.with_conn(|conn| {
            conn.query_row("SELECT 1 FROM settings WHERE setting_key = ?1", [key], |_| {
                Ok(())
            })
            .optional()
            .map(|found| found.is_some())
        })
    }

    async fn update_setting(&self, row: &SettingRow) -> Result<u64> {
        self.client.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE settings SET setting_value = ?2 WHERE setting_key = ?1",
                params![row.key, row.value],
            )?;
            Ok(changed as u64)
        })
    }

    async fn insert_setting(&self, row: &SettingRow) -> Result<()> {
        self.client.with_conn(|conn| {
            conn.execute(
                "INSERT INTO settings (setting_key, setting_value) VALUES (?1, ?2)",
                params![row.key, row.value],
            )?;
            Ok(())
        })
    }
}

#[async_trait]
impl ClinicStore for SqliteAdapter {
    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection()
    }

    async fn ensure_schema(&self) -> Result<()> {
        self.client.ensure_schema()
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
