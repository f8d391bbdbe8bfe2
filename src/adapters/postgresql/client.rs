//! PostgreSQL client implementation
//!
//! This module provides the pooled client for interacting with PostgreSQL.

use crate::config::schema::PostgreSQLConfig;
use crate::domain::{ClinicError, Result};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use secrecy::ExposeSecret;
use std::time::Duration;
use tokio_postgres::error::SqlState;
use tokio_postgres::types::ToSql;
use tokio_postgres::{NoTls, Row};

/// PostgreSQL client for MyClinic
///
/// Wraps a `deadpool-postgres` connection pool. Connections are opened
/// lazily on first use, so creating the client never touches the network.
pub struct PostgreSQLClient {
    /// Connection pool
    pool: Pool,

    /// Configuration
    config: PostgreSQLConfig,
}

impl PostgreSQLClient {
    /// Create a new PostgreSQL client
    ///
    /// # Arguments
    ///
    /// * `config` - PostgreSQL configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the connection pool cannot be built.
    pub fn new(config: PostgreSQLConfig) -> Result<Self> {
        let mut pg_config = tokio_postgres::Config::new();
        pg_config
            .host(&config.host)
            .port(config.port)
            .user(&config.user)
            .password(config.password.expose_secret().as_ref())
            .dbname(&config.database)
            .connect_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .options(&format!(
                "-c statement_timeout={}",
                config.statement_timeout_seconds * 1000
            ));

        let manager = Manager::from_config(
            pg_config,
            NoTls,
            ManagerConfig {
                recycling_method: RecyclingMethod::Fast,
            },
        );

        let timeout = Some(Duration::from_secs(config.connection_timeout_seconds));
        let pool = Pool::builder(manager)
            .max_size(config.max_connections)
            .runtime(Runtime::Tokio1)
            .wait_timeout(timeout)
            .create_timeout(timeout)
            .recycle_timeout(timeout)
            .build()
            .map_err(|e| {
                ClinicError::Configuration(format!("Failed to create connection pool: {e}"))
            })?;

        Ok(Self { pool, config })
    }

    /// Test the connection to PostgreSQL
    ///
    /// Attempts to get a connection from the pool and execute a simple query.
    pub async fn test_connection(&self) -> Result<()> {
        let client = self.get_connection().await?;

        client
            .query_one("SELECT 1", &[])
            .await
            .map_err(|e| ClinicError::Connection(format!("Connection test failed: {e}")))?;

        tracing::debug!("PostgreSQL connection test successful");
        Ok(())
    }

    /// Ensure the schema exists
    ///
    /// Runs the migration SQL, which only uses `IF NOT EXISTS` statements.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    pub async fn ensure_schema(&self) -> Result<()> {
        let client = self.get_connection().await?;

        let migration_sql = include_str!("../../../migrations/001_initial_schema.sql");

        client
            .batch_execute(migration_sql)
            .await
            .map_err(|e| ClinicError::Database(format!("Failed to execute migration: {e}")))?;

        tracing::info!(database = %self.config.database, "PostgreSQL schema initialized");
        Ok(())
    }

    /// Get a connection from the pool
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::Connection` if a connection cannot be obtained.
    pub async fn get_connection(&self) -> Result<deadpool_postgres::Object> {
        self.pool.get().await.map_err(|e| {
            ClinicError::Connection(format!("Failed to get connection from pool: {e}"))
        })
    }

    /// Execute a query and return rows
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn query(&self, query: &str, params: &[&(dyn ToSql + Sync)]) -> Result<Vec<Row>> {
        let client = self.get_connection().await?;
        client.query(query, params).await.map_err(map_pg_error)
    }

    /// Execute a query expected to return exactly one row
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or does not return exactly one row.
    pub async fn query_one(&self, query: &str, params: &[&(dyn ToSql + Sync)]) -> Result<Row> {
        let client = self.get_connection().await?;
        client.query_one(query, params).await.map_err(map_pg_error)
    }

    /// Execute a statement and return the number of affected rows
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub async fn execute(&self, statement: &str, params: &[&(dyn ToSql + Sync)]) -> Result<u64> {
        let client = self.get_connection().await?;
        client.execute(statement, params).await.map_err(map_pg_error)
    }

    /// Connection target for logs (never includes the password)
    pub fn connection_string_safe(&self) -> String {
        format!(
            "postgresql://{}:***@{}:{}/{}",
            self.config.user, self.config.host, self.config.port, self.config.database
        )
    }

    /// Get the pool statistics
    pub fn pool_status(&self) -> deadpool_postgres::Status {
        self.pool.status()
    }
}

/// Translates driver errors into domain errors
///
/// Foreign key violations become `InvalidReference` so the HTTP layer can
/// report them as client errors.
pub(crate) fn map_pg_error(err: tokio_postgres::Error) -> ClinicError {
    if err.code() == Some(&SqlState::FOREIGN_KEY_VIOLATION) {
        let detail = err
            .as_db_error()
            .and_then(|db| db.detail())
            .unwrap_or("referenced row does not exist");
        return ClinicError::InvalidReference(detail.to_string());
    }

    if err.is_closed() {
        return ClinicError::Connection(format!("Connection closed: {err}"));
    }

    ClinicError::Database(
        err.as_db_error()
            .map(|db| db.message().to_string())
            .unwrap_or_else(|| err.to_string()),
    )
}
