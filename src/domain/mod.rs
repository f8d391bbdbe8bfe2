//! Domain models and types for MyClinic.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`PatientId`], [`AppointmentId`])
//! - **Stored records** ([`PatientRecord`], [`AppointmentRecord`], [`SettingRow`])
//! - **Request payloads** ([`PatientPayload`], [`AppointmentPayload`])
//! - **Error types** ([`ClinicError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Patient and appointment ids are distinct newtypes:
//!
//! ```rust
//! use myclinic::domain::{AppointmentId, PatientId};
//!
//! let patient = PatientId::new(7);
//! let appointment = AppointmentId::new(7);
//!
//! // This won't compile - the id types do not mix
//! // let wrong: PatientId = appointment;
//! assert_eq!(patient.hospital_number(), "HN00007");
//! # let _ = appointment;
//! ```

pub mod appointment;
pub mod errors;
pub mod ids;
pub mod nullable;
pub mod patient;
pub mod result;
pub mod settings;

// Re-export commonly used types for convenience
pub use appointment::{
    AppointmentFields, AppointmentPayload, AppointmentRecord, AppointmentStatus, AppointmentView,
    PatientRef,
};
pub use errors::ClinicError;
pub use ids::{AppointmentId, PatientId};
pub use patient::{
    Gender, NewPatient, PatientPatch, PatientPayload, PatientRecord, PatientSummary,
};
pub use result::Result;
pub use settings::{SettingRow, SettingsMap};
