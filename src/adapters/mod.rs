//! Store integrations for MyClinic.
//!
//! - [`database`] - Store abstraction layer (trait-based) and factory
//! - [`postgresql`] - PostgreSQL implementation
//! - [`sqlite`] - Embedded SQLite implementation
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate driver dependencies.
//! Handlers only see [`database::ClinicStore`]; the factory picks the backend
//! from `database_target`.
//!
//! ```rust
//! use myclinic::adapters::database::ClinicStore;
//! use myclinic::adapters::sqlite::SqliteAdapter;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteAdapter::in_memory()?;
//! store.test_connection().await?;
//! assert_eq!(store.backend_name(), "sqlite");
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod postgresql;
pub mod sqlite;
