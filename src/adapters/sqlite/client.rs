//! SQLite client implementation

use super::schema::SCHEMA;
use crate::domain::{ClinicError, Result};
use rusqlite::{ffi, Connection};
use std::path::Path;
use std::sync::Mutex;

/// Embedded SQLite connection shared by all requests
///
/// Statements run synchronously under a mutex; no lock is ever held across
/// an `.await`.
pub struct SqliteClient {
    conn: Mutex<Connection>,
    path: String,
}

impl SqliteClient {
    /// Open the database at `path`, creating the file if needed
    ///
    /// `":memory:"` opens a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::Connection` if the database cannot be opened.
    pub fn open(path: &str) -> Result<Self> {
        let conn = if path == ":memory:" {
            Connection::open_in_memory()
        } else {
            Connection::open(Path::new(path))
        }
        .map_err(|e| ClinicError::Connection(format!("Failed to open SQLite '{path}': {e}")))?;

        conn.pragma_update(None, "foreign_keys", true)
            .map_err(map_sqlite_error)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: path.to_string(),
        })
    }

    /// Create an in-memory database with the schema applied (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let client = Self::open(":memory:")?;
        client.ensure_schema()?;
        Ok(client)
    }

    /// Apply the schema
    pub fn ensure_schema(&self) -> Result<()> {
        self.with_conn(|conn| conn.execute_batch(SCHEMA))?;
        tracing::info!(path = %self.path, "SQLite schema initialized");
        Ok(())
    }

    /// Run a trivial query to check the connection
    pub fn test_connection(&self) -> Result<()> {
        self.with_conn(|conn| conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0)))
            .map(|_| ())
    }

    /// Run `f` against the locked connection, translating driver errors
    pub fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|_| ClinicError::Connection("SQLite connection lock poisoned".to_string()))?;
        f(&conn).map_err(map_sqlite_error)
    }

    /// Database path as configured
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Translates driver errors into domain errors
pub(crate) fn map_sqlite_error(err: rusqlite::Error) -> ClinicError {
    match &err {
        rusqlite::Error::SqliteFailure(code, _)
            if code.extended_code == ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            ClinicError::InvalidReference("referenced patient does not exist".to_string())
        }
        rusqlite::Error::FromSqlConversionFailure(..) | rusqlite::Error::InvalidColumnType(..) => {
            ClinicError::Database(format!("Failed to read column: {err}"))
        }
        _ => ClinicError::Database(err.to_string()),
    }
}
