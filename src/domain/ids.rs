//! Domain identifier types
//!
//! Newtype wrappers for the store-assigned numeric identifiers. Keeping
//! patient and appointment ids apart prevents passing one where the other
//! is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Patient identifier newtype wrapper
///
/// Assigned by the store on insert and never changed afterwards.
///
/// # Examples
///
/// ```
/// use myclinic::domain::ids::PatientId;
///
/// let id = PatientId::new(7);
/// assert_eq!(id.hospital_number(), "HN00007");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(i64);

impl PatientId {
    /// Creates a new PatientId
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric value
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Derives the display Hospital Number: `HN` + the id left-padded to 5 digits
    ///
    /// Ids wider than five digits are rendered in full, never truncated.
    pub fn hospital_number(&self) -> String {
        format!("HN{:05}", self.0)
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Appointment identifier newtype wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(i64);

impl AppointmentId {
    /// Creates a new AppointmentId
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
