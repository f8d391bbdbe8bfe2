//! Core business logic for MyClinic.
//!
//! # Modules
//!
//! - [`mapper`] - Translation between stored rows and API shapes
//! - [`auth`] - Credential verification and bearer sessions
//!
//! # Request Workflow
//!
//! A typical write request:
//!
//! 1. **Decode**: The handler deserializes the JSON payload
//! 2. **Map**: The mapper validates presence and turns the payload into row values
//! 3. **Persist**: The store executes one statement (or a read-then-write pair)
//! 4. **Respond**: The handler serializes the mapped result
//!
//! # Example
//!
//! ```rust
//! use myclinic::core::mapper::patient::{split_name, to_new_patient};
//! use myclinic::domain::PatientPayload;
//!
//! let payload: PatientPayload =
//!     serde_json::from_str(r#"{"firstName": "Jane", "lastName": "Doe", "phone": "1"}"#).unwrap();
//! let new = to_new_patient(&payload).unwrap();
//! assert_eq!(split_name(&new.name), ("Jane".to_string(), "Doe".to_string()));
//! ```

pub mod auth;
pub mod mapper;
