//! Store abstraction layer
//!
//! This module provides a trait-based abstraction for store operations,
//! allowing MyClinic to run on different backends (PostgreSQL, SQLite).

pub mod factory;
pub mod traits;

pub use factory::create_clinic_store;
pub use traits::{AppointmentStore, ClinicStore, PatientStore, SettingsStore};
