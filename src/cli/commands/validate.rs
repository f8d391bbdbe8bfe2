//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the MyClinic configuration file.

use crate::config::load_config;
use crate::config::schema::DatabaseTarget;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading also validates
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Listen Address: {}", config.server.bind_address());
        println!("  CORS Origins: {}", config.server.cors_allowed_origins.join(", "));

        match config.database_target {
            DatabaseTarget::PostgreSQL => {
                let pg = &config.postgresql;
                println!("  Database Target: PostgreSQL");
                println!(
                    "  PostgreSQL Connection: postgresql://{}:***@{}:{}/{}",
                    pg.user, pg.host, pg.port, pg.database
                );
                println!("  Max Connections: {}", pg.max_connections);
            }
            DatabaseTarget::SQLite => {
                println!("  Database Target: SQLite");
                println!("  SQLite Path: {}", config.sqlite.path);
            }
        }

        println!(
            "  Sessions Required: {}",
            if config.auth.require_session { "yes" } else { "no" }
        );
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_valid_file_returns_zero() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"database_target = \"sqlite\"\n").unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_missing_file_returns_config_error() {
        let code = ValidateArgs {}
            .execute("does-not-exist.toml")
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}
