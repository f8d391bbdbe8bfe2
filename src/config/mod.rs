//! Configuration management for MyClinic.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! MyClinic uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `MYCLINIC_<SECTION>_<KEY>` overrides plus the legacy `DB_*`/`PORT` names
//! - Default values for every setting
//! - Validation of the active sections
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use myclinic::config::load_config_or_default;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("myclinic.toml")?;
//!
//! println!("Listening on {}", config.server.bind_address());
//! println!("Store: {}", config.database_target);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`ServerConfig`] - Bind address, CORS and request timeout
//! - [`PostgreSQLConfig`] - PostgreSQL connection and pool
//! - [`SqliteConfig`] - SQLite file path
//! - [`AuthConfig`] - Login credentials and session lifetime
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! database_target = "postgresql"
//!
//! [server]
//! port = 5000
//!
//! [postgresql]
//! host = "localhost"
//! user = "root"
//! password = "${MYCLINIC_DB_PASSWORD}"
//! database = "myclinic_db"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, AuthConfig, DatabaseTarget, LoggingConfig, MyClinicConfig,
    PostgreSQLConfig, ServerConfig, SqliteConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
