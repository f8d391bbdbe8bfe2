//! Configuration schema types
//!
//! This module defines the configuration structure for MyClinic. Every
//! section has defaults, so an empty file (or no file at all) is a valid
//! configuration.

use crate::config::{secret_string, SecretString};
use serde::{Deserialize, Serialize};

/// Store backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseTarget {
    /// PostgreSQL database
    #[default]
    PostgreSQL,
    /// Embedded SQLite database
    SQLite,
}

impl std::fmt::Display for DatabaseTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseTarget::PostgreSQL => write!(f, "postgresql"),
            DatabaseTarget::SQLite => write!(f, "sqlite"),
        }
    }
}

impl std::str::FromStr for DatabaseTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgresql" | "postgres" => Ok(DatabaseTarget::PostgreSQL),
            "sqlite" => Ok(DatabaseTarget::SQLite),
            _ => Err(format!(
                "Invalid database_target '{s}'. Must be one of: postgresql, sqlite"
            )),
        }
    }
}

/// Main MyClinic configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MyClinicConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Store backend (postgresql or sqlite)
    #[serde(default)]
    pub database_target: DatabaseTarget,

    /// PostgreSQL configuration (used when database_target = postgresql)
    #[serde(default)]
    pub postgresql: PostgreSQLConfig,

    /// SQLite configuration (used when database_target = sqlite)
    #[serde(default)]
    pub sqlite: SqliteConfig,

    /// Login and session settings
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MyClinicConfig {
    /// Validates the configuration
    ///
    /// Both store sections may be present; only the active one is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.server.validate()?;

        match self.database_target {
            DatabaseTarget::PostgreSQL => self.postgresql.validate()?,
            DatabaseTarget::SQLite => self.sqlite.validate()?,
        }

        self.auth.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_server_host")]
    pub host: String,

    /// Listening port
    #[serde(default = "default_server_port")]
    pub port: u16,

    /// Allowed CORS origins; `"*"` allows any origin
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

impl ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("server.host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("server.port must be > 0".to_string());
        }

        if self.request_timeout_seconds == 0 {
            return Err("server.request_timeout_seconds must be > 0".to_string());
        }

        for origin in &self.cors_allowed_origins {
            if origin != "*" && !origin.starts_with("http://") && !origin.starts_with("https://")
            {
                return Err(format!(
                    "server.cors_allowed_origins entry '{origin}' must be \"*\" or start with http:// or https://"
                ));
            }
        }

        Ok(())
    }

    /// `host:port` string for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            cors_allowed_origins: default_cors_allowed_origins(),
            request_timeout_seconds: default_request_timeout_seconds(),
        }
    }
}

/// PostgreSQL configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostgreSQLConfig {
    /// Server host
    #[serde(default = "default_pg_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_pg_port")]
    pub port: u16,

    /// Login user
    #[serde(default = "default_pg_user")]
    pub user: String,

    /// Login password
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default = "default_pg_password")]
    pub password: SecretString,

    /// Database name
    #[serde(default = "default_pg_database")]
    pub database: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_pg_max_connections")]
    pub max_connections: usize,

    /// Connection timeout in seconds
    #[serde(default = "default_pg_connection_timeout_seconds")]
    pub connection_timeout_seconds: u64,

    /// Statement timeout in seconds
    #[serde(default = "default_pg_statement_timeout_seconds")]
    pub statement_timeout_seconds: u64,
}

impl PostgreSQLConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("postgresql.host cannot be empty".to_string());
        }

        if self.user.trim().is_empty() {
            return Err("postgresql.user cannot be empty".to_string());
        }

        if self.database.trim().is_empty() {
            return Err("postgresql.database cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("postgresql.port must be > 0".to_string());
        }

        if self.max_connections == 0 || self.max_connections > 100 {
            return Err(format!(
                "postgresql.max_connections must be between 1 and 100, got {}",
                self.max_connections
            ));
        }

        if self.connection_timeout_seconds == 0 {
            return Err("postgresql.connection_timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for PostgreSQLConfig {
    fn default() -> Self {
        Self {
            host: default_pg_host(),
            port: default_pg_port(),
            user: default_pg_user(),
            password: default_pg_password(),
            database: default_pg_database(),
            max_connections: default_pg_max_connections(),
            connection_timeout_seconds: default_pg_connection_timeout_seconds(),
            statement_timeout_seconds: default_pg_statement_timeout_seconds(),
        }
    }
}

/// SQLite configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteConfig {
    /// Database file path, or `:memory:`
    #[serde(default = "default_sqlite_path")]
    pub path: String,
}

impl SqliteConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("sqlite.path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            path: default_sqlite_path(),
        }
    }
}

/// Login and session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Require a bearer session on every resource route
    #[serde(default)]
    pub require_session: bool,

    /// Accepted login username
    #[serde(default = "default_auth_username")]
    pub username: String,

    /// Accepted login password
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default = "default_auth_password")]
    pub password: SecretString,

    /// Session lifetime in minutes
    #[serde(default = "default_session_ttl_minutes")]
    pub session_ttl_minutes: i64,
}

impl AuthConfig {
    fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("auth.username cannot be empty".to_string());
        }

        if self.session_ttl_minutes <= 0 {
            return Err(format!(
                "auth.session_ttl_minutes must be > 0, got {}",
                self.session_ttl_minutes
            ));
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            require_session: false,
            username: default_auth_username(),
            password: default_auth_password(),
            session_ttl_minutes: default_session_ttl_minutes(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    5000
}

fn default_cors_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_request_timeout_seconds() -> u64 {
    30
}

fn default_pg_host() -> String {
    "localhost".to_string()
}

fn default_pg_port() -> u16 {
    5432
}

fn default_pg_user() -> String {
    "root".to_string()
}

fn default_pg_password() -> SecretString {
    secret_string(String::new())
}

fn default_pg_database() -> String {
    "myclinic_db".to_string()
}

fn default_pg_max_connections() -> usize {
    10
}

fn default_pg_connection_timeout_seconds() -> u64 {
    30
}

fn default_pg_statement_timeout_seconds() -> u64 {
    60
}

fn default_sqlite_path() -> String {
    "myclinic.db".to_string()
}

fn default_auth_username() -> String {
    "admin".to_string()
}

fn default_auth_password() -> SecretString {
    secret_string("password".to_string())
}

fn default_session_ttl_minutes() -> i64 {
    480
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig {
            log_level: "info".to_string(),
        };

        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_server_config_validation() {
        let mut config = ServerConfig::default();
        assert!(config.validate().is_ok());

        config.port = 0;
        assert!(config.validate().is_err());

        config.port = 5000;
        config.cors_allowed_origins = vec!["localhost:3000".to_string()];
        assert!(config.validate().is_err());

        config.cors_allowed_origins = vec!["http://localhost:3000".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_postgresql_config_validation() {
        let mut config = PostgreSQLConfig::default();
        assert!(config.validate().is_ok());

        config.max_connections = 0;
        assert!(config.validate().is_err());

        config.max_connections = 101;
        assert!(config.validate().is_err());

        config.max_connections = 10;
        config.database = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_only_active_store_validated() {
        let mut config = MyClinicConfig::default();
        config.database_target = DatabaseTarget::SQLite;
        config.postgresql.host = String::new();
        assert!(config.validate().is_ok());

        config.database_target = DatabaseTarget::PostgreSQL;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_auth_config_validation() {
        let mut config = AuthConfig::default();
        assert!(config.validate().is_ok());

        config.session_ttl_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert!(!config.local_enabled);
        assert_eq!(config.local_path, "logs");
        assert_eq!(config.local_rotation, "daily");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_rotation_validation() {
        let config = LoggingConfig {
            local_rotation: "size".to_string(),
            ..LoggingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_database_target_parse() {
        assert_eq!(
            "PostgreSQL".parse::<DatabaseTarget>().unwrap(),
            DatabaseTarget::PostgreSQL
        );
        assert_eq!("sqlite".parse::<DatabaseTarget>().unwrap(), DatabaseTarget::SQLite);
        assert!("mysql".parse::<DatabaseTarget>().is_err());
    }

    #[test]
    fn test_default_values() {
        let config = MyClinicConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database_target, DatabaseTarget::PostgreSQL);
        assert_eq!(config.postgresql.host, "localhost");
        assert_eq!(config.postgresql.user, "root");
        assert_eq!(config.postgresql.password.expose_secret().as_ref(), "");
        assert_eq!(config.postgresql.database, "myclinic_db");
        assert_eq!(config.postgresql.max_connections, 10);
        assert_eq!(config.auth.username, "admin");
        assert!(!config.auth.require_session);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: MyClinicConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.sqlite.path, "myclinic.db");
    }
}
