//! Appointment domain model

use super::ids::{AppointmentId, PatientId};
use super::nullable::nullable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Appointment lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// All recognized statuses, in lifecycle order
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    /// Stored representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "Invalid appointment status '{}'. Must be one of: {}",
                    s,
                    Self::ALL.map(|st| st.as_str()).join(", ")
                )
            })
    }
}

/// An appointment row as persisted in the `appointments` table
///
/// Every column except `id` is nullable: updates overwrite all mutable
/// columns, so a field omitted from an update body is stored as `NULL`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentRecord {
    pub id: AppointmentId,
    pub fields: AppointmentFields,
}

/// Mutable columns of an appointment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentFields {
    /// Free-text patient name
    pub patient_name: Option<String>,

    pub appointment_date: Option<NaiveDate>,

    /// Free-text time of day, usually `HH:MM`
    pub appointment_time: Option<String>,

    pub reason: Option<String>,

    /// Stored status text
    pub status: Option<String>,

    /// Optional reference to a registered patient
    pub patient_id: Option<PatientId>,
}

/// Patient reference as sent by clients: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PatientRef {
    Number(i64),
    Text(String),
}

/// Request body for `POST /appointments` and `PUT /appointments/:id`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentPayload {
    #[serde(default)]
    pub patient_name: Option<String>,

    #[serde(default)]
    pub appointment_date: Option<String>,

    #[serde(default)]
    pub appointment_time: Option<String>,

    #[serde(default)]
    pub reason: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    /// Distinguishes an absent key from an explicit `null`
    #[serde(default, deserialize_with = "nullable")]
    pub patient_id: Option<Option<PatientRef>>,
}

impl AppointmentPayload {
    /// Returns `true` when the body names nothing to update
    ///
    /// Empty strings count as absent; `patient_id` counts as present whenever
    /// the key exists, even with a `null` value.
    pub fn is_blank(&self) -> bool {
        fn blank(value: &Option<String>) -> bool {
            value.as_deref().map_or(true, |v| v.trim().is_empty())
        }

        blank(&self.patient_name)
            && blank(&self.appointment_date)
            && blank(&self.appointment_time)
            && blank(&self.reason)
            && blank(&self.status)
            && self.patient_id.is_none()
    }
}

/// Appointment as returned by `GET /appointments`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentView {
    pub id: AppointmentId,
    pub patient_name: Option<String>,
    /// ISO `YYYY-MM-DD`
    pub appointment_date: Option<String>,
    pub appointment_time: Option<String>,
    pub reason: Option<String>,
    pub status: Option<String>,
    pub patient_id: Option<PatientId>,
}
