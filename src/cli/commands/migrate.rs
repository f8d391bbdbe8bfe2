//! Migrate command implementation

use crate::adapters::database::{create_clinic_store, ClinicStore};
use crate::config::load_config_or_default;
use clap::Args;

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {}

impl MigrateArgs {
    /// Apply the schema to the configured store
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("🗄️  Applying schema to {} store", config.database_target);

        let store = match create_clinic_store(&config).await {
            Ok(s) => s,
            Err(e) => {
                println!("❌ Failed to connect to database");
                println!("   Error: {e}");
                return Ok(4);
            }
        };

        if let Err(e) = store.test_connection().await {
            println!("❌ Failed to connect to database");
            println!("   Error: {e}");
            return Ok(4);
        }

        match store.ensure_schema().await {
            Ok(()) => {
                tracing::info!(backend = store.backend_name(), "Schema applied");
                println!("✅ Schema is up to date");
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Schema migration failed");
                println!("❌ Schema migration failed");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_migrate_sqlite_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("clinic.db");

        let mut config_file = NamedTempFile::new().unwrap();
        writeln!(
            config_file,
            "database_target = \"sqlite\"\n[sqlite]\npath = \"{}\"",
            db_path.display()
        )
        .unwrap();

        let code = MigrateArgs {}
            .execute(config_file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 0);
        assert!(db_path.exists());
    }
}
