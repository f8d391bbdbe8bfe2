// MyClinic - Clinic Administration Backend
// Copyright (c) 2025 MyClinic Contributors
// Licensed under the MIT License

//! # MyClinic - Clinic Administration Backend
//!
//! MyClinic serves the REST API behind a small clinic's front desk:
//! patients, appointments and clinic settings, stored in PostgreSQL or an
//! embedded SQLite file.
//!
//! ## Architecture
//!
//! MyClinic follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`api`] - axum router, handlers and error envelope
//! - [`core`] - Record mapping between rows and API shapes, sessions
//! - [`adapters`] - Store backends (PostgreSQL, SQLite)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use myclinic::adapters::database::create_clinic_store;
//! use myclinic::config::load_config_or_default;
//! use tokio::sync::watch;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("myclinic.toml")?;
//!     let store = create_clinic_store(&config).await?;
//!     store.ensure_schema().await?;
//!
//!     let (_stop, shutdown) = watch::channel(false);
//!     myclinic::api::serve(&config, store, shutdown).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Record Mapping
//!
//! Stored patients keep one `name` column; the API splits it and derives a
//! Hospital Number from the id:
//!
//! ```rust
//! use myclinic::core::mapper::patient::{split_name, to_summary};
//! use myclinic::domain::{Gender, PatientId, PatientRecord};
//!
//! let record = PatientRecord {
//!     id: PatientId::new(7),
//!     name: "สมชาย ใจดี".to_string(),
//!     phone: "0812345678".to_string(),
//!     gender: Gender::Male,
//!     dob: None,
//!     created_at: None,
//! };
//!
//! let summary = to_summary(&record);
//! assert_eq!(summary.hn, "HN00007");
//! assert_eq!(summary.first_name, "สมชาย");
//! assert_eq!(summary.last_visit, "");
//! assert_eq!(split_name("Somchai"), ("Somchai".to_string(), String::new()));
//! ```
//!
//! ## Error Handling
//!
//! Library code returns [`domain::ClinicError`]; handlers turn it into an
//! HTTP status and a `{message, error}` body through [`api::ApiError`].
//!
//! ## Logging
//!
//! MyClinic uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(patient_id = 7, "Patient created");
//! warn!(username = "admin", "Login rejected");
//! ```

pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
