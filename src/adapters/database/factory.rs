//! Store factory
//!
//! This module provides the factory function that creates a store based on configuration.

use crate::adapters::database::traits::ClinicStore;
use crate::adapters::postgresql::adapter::PostgreSQLAdapter;
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::sqlite::adapter::SqliteAdapter;
use crate::adapters::sqlite::client::SqliteClient;
use crate::config::schema::{DatabaseTarget, MyClinicConfig};
use crate::domain::Result;
use std::sync::Arc;

/// Create a store based on the configuration
///
/// This factory function examines the `database_target` in the configuration
/// and creates the appropriate store implementation. No connection is made
/// yet for PostgreSQL; the pool connects lazily.
///
/// # Arguments
///
/// * `config` - The MyClinic configuration
///
/// # Returns
///
/// Returns an Arc-wrapped trait object that implements ClinicStore
///
/// # Errors
///
/// Returns an error if the store cannot be created
pub async fn create_clinic_store(config: &MyClinicConfig) -> Result<Arc<dyn ClinicStore>> {
    match config.database_target {
        DatabaseTarget::PostgreSQL => {
            let client = PostgreSQLClient::new(config.postgresql.clone())?;
            let adapter = PostgreSQLAdapter::new(client);
            tracing::info!(
                connection = %adapter.client().connection_string_safe(),
                max_connections = config.postgresql.max_connections,
                "Created PostgreSQL store"
            );
            Ok(Arc::new(adapter) as Arc<dyn ClinicStore>)
        }
        DatabaseTarget::SQLite => {
            let adapter = SqliteAdapter::new(SqliteClient::open(&config.sqlite.path)?);
            tracing::info!(path = %adapter.client().path(), "Opened SQLite store");
            Ok(Arc::new(adapter) as Arc<dyn ClinicStore>)
        }
    }
}
