//! Patient domain model
//!
//! The store keeps a patient's full name as one string; splitting it into
//! first/last name happens in [`crate::core::mapper`]. This module holds the
//! stored record, the insert/update shapes and the request payload.

use super::ids::PatientId;
use super::nullable::nullable;
use crate::core::mapper::patient::{join_name, split_name};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Patient gender as stored by the clinic
///
/// Stored values are the Thai labels used by the front desk. Unknown or
/// missing input falls back to [`Gender::Male`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    /// `ชาย`
    #[default]
    Male,
    /// `หญิง`
    Female,
}

impl Gender {
    /// Stored representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "ชาย",
            Gender::Female => "หญิง",
        }
    }

    /// Parses a recognized gender label, returning `None` for anything else
    ///
    /// Accepts the stored Thai labels as well as `male`/`female`/`m`/`f`
    /// in any letter case.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        match value {
            "ชาย" => return Some(Gender::Male),
            "หญิง" => return Some(Gender::Female),
            _ => {}
        }
        match value.to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }

    /// Parses a gender, substituting the default when missing or unrecognized
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Gender {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A patient row as persisted in the `patients` table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientRecord {
    /// Store-assigned identifier
    pub id: PatientId,

    /// Full name, first and last separated by whitespace
    pub name: String,

    /// Contact phone number
    pub phone: String,

    /// Gender
    pub gender: Gender,

    /// Date of birth
    pub dob: Option<NaiveDate>,

    /// Creation timestamp assigned by the store
    pub created_at: Option<DateTime<Utc>>,
}

/// Values for inserting a new patient row
#[derive(Debug, Clone, PartialEq)]
pub struct NewPatient {
    pub name: String,
    pub phone: String,
    pub gender: Gender,
    pub dob: Option<NaiveDate>,
}

/// Partial patient update
///
/// Each `Some` field replaces the stored value; `None` leaves it untouched.
/// `dob` is doubly optional so that an explicit `null` clears the date.
///
/// A full `name` wins over the halves. A lone `first_name` or `last_name`
/// replaces only that half of the stored name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientPatch {
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub dob: Option<Option<NaiveDate>>,
}

impl PatientPatch {
    /// Returns `true` when the patch carries no field at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone.is_none()
            && self.gender.is_none()
            && self.dob.is_none()
    }

    fn merged_name(
        name: Option<String>,
        first: Option<String>,
        last: Option<String>,
        existing: String,
    ) -> String {
        if let Some(name) = name {
            return name;
        }
        if first.is_none() && last.is_none() {
            return existing;
        }

        let (stored_first, stored_last) = split_name(&existing);
        join_name(
            first.as_deref().unwrap_or(&stored_first),
            last.as_deref().unwrap_or(&stored_last),
        )
    }

    /// Merges the patch onto an existing record and returns the updated record
    ///
    /// Identity and creation timestamp are never altered.
    pub fn apply_to(self, existing: PatientRecord) -> PatientRecord {
        PatientRecord {
            id: existing.id,
            name: Self::merged_name(self.name, self.first_name, self.last_name, existing.name),
            phone: self.phone.unwrap_or(existing.phone),
            gender: self.gender.unwrap_or(existing.gender),
            dob: self.dob.unwrap_or(existing.dob),
            created_at: existing.created_at,
        }
    }
}

/// Request body for `POST /patients` and `PUT /patients/:id`
///
/// Clients send either a single `name` or separate `firstName`/`lastName`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientPayload {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub dob: Option<Option<String>>,
}

/// Patient as returned by `GET /patients`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    /// Identifier rendered as a string
    pub id: String,
    /// Derived Hospital Number
    pub hn: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    /// ISO date of the last visit, empty when unknown
    pub last_visit: String,
    pub gender: Gender,
    /// ISO date of birth, empty when unknown
    pub dob: String,
}
