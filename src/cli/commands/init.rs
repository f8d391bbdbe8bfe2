//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "myclinic.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing MyClinic configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set database_target to 'postgresql' or 'sqlite'");
                println!("  3. Put credentials in a .env file (MYCLINIC_POSTGRESQL_PASSWORD, MYCLINIC_AUTH_PASSWORD)");
                println!("  4. Validate configuration: myclinic validate-config");
                println!("  5. Start the server: myclinic serve");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# MyClinic Configuration File

database_target = "postgresql"  # postgresql | sqlite

[application]
log_level = "info"

[server]
host = "0.0.0.0"
port = 5000

[postgresql]
host = "localhost"
port = 5432
user = "root"
password = "${MYCLINIC_PG_PASSWORD}"
database = "myclinic_db"
max_connections = 10

[sqlite]
path = "myclinic.db"

[auth]
require_session = false
username = "admin"
password = "${MYCLINIC_ADMIN_PASSWORD}"

[logging]
local_enabled = false
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# MyClinic Configuration File
#
# Every setting has a default; remove anything you do not need to change.
# Values may reference environment variables with ${VAR_NAME}, and any
# setting can be overridden with MYCLINIC_<SECTION>_<KEY>, for example
# MYCLINIC_SERVER_PORT=8080. The plain DB_HOST, DB_USER, DB_PASSWORD,
# DB_NAME and PORT variables are honoured too.

# ============================================================================
# Store Selection
# ============================================================================
# postgresql: shared PostgreSQL server (production)
# sqlite: embedded single-file database
database_target = "postgresql"

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
log_level = "info"

# ============================================================================
# HTTP Server
# ============================================================================
[server]
host = "0.0.0.0"
port = 5000

# "*" allows any origin; otherwise list full origins
# cors_allowed_origins = ["http://localhost:3000"]
cors_allowed_origins = ["*"]

# Requests running longer than this are answered with 408
request_timeout_seconds = 30

# ============================================================================
# PostgreSQL
# ============================================================================
[postgresql]
host = "localhost"
port = 5432
user = "root"
password = "${MYCLINIC_PG_PASSWORD}"
database = "myclinic_db"

# Pool size (1-100)
max_connections = 10
connection_timeout_seconds = 30
statement_timeout_seconds = 60

# ============================================================================
# SQLite
# ============================================================================
[sqlite]
# File path, or ":memory:" for a throwaway database
path = "myclinic.db"

# ============================================================================
# Authentication
# ============================================================================
[auth]
# When true, /patients, /appointments and /settings need
# "Authorization: Bearer <token>" from POST /auth/login
require_session = false
username = "admin"
password = "${MYCLINIC_ADMIN_PASSWORD}"
session_ttl_minutes = 480

# ============================================================================
# Logging
# ============================================================================
[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "logs"
local_rotation = "daily"  # daily | hourly
"#
        .to_string()
    }
}
