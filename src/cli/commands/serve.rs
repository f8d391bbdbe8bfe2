//! Serve command implementation
//!
//! Connects to the configured store, applies the schema and runs the HTTP
//! server until SIGINT/SIGTERM.

use crate::adapters::database::{create_clinic_store, ClinicStore};
use crate::api;
use crate::config::load_config_or_default;
use clap::Args;
use tokio::sync::watch;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override the listening port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Skip the idempotent schema bootstrap on start-up
    #[arg(long)]
    pub skip_migrations: bool,
}

impl ServeArgs {
    /// Execute the serve command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        if let Some(port) = self.port {
            tracing::info!(port, "Overriding port from CLI");
            config.server.port = port;
        }
        if let Some(host) = &self.host {
            tracing::info!(host = %host, "Overriding host from CLI");
            config.server.host = host.clone();
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let store = match create_clinic_store(&config).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create store");
                eprintln!("Failed to initialize database: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        if let Err(e) = store.test_connection().await {
            tracing::error!(error = %e, backend = store.backend_name(), "Database connection failed");
            eprintln!("Database connection failed: {e}");
            return Ok(4);
        }

        if !self.skip_migrations {
            if let Err(e) = store.ensure_schema().await {
                tracing::error!(error = %e, "Schema bootstrap failed");
                eprintln!("Schema bootstrap failed: {e}");
                return Ok(4);
            }
        }

        println!("🚀 MyClinic listening on {}", config.server.bind_address());

        if let Err(e) = api::serve(&config, store, shutdown_signal).await {
            tracing::error!(error = %e, "Server failed");
            eprintln!("Server failed: {e}");
            return Ok(5); // Fatal error exit code
        }

        Ok(0)
    }
}
