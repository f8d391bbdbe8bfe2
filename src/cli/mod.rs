//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for MyClinic using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// MyClinic - clinic administration backend
#[derive(Parser, Debug)]
#[command(name = "myclinic")]
#[command(version, about, long_about = None)]
#[command(author = "MyClinic Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "myclinic.toml", env = "MYCLINIC_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MYCLINIC_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),

    /// Apply the database schema
    Migrate(commands::migrate::MigrateArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_serve() {
        let cli = Cli::parse_from(["myclinic", "serve"]);
        assert_eq!(cli.config, "myclinic.toml");
        assert!(matches!(cli.command, Commands::Serve(_)));
    }

    #[test]
    fn test_cli_parse_serve_port_override() {
        let cli = Cli::parse_from(["myclinic", "serve", "--port", "8080"]);
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.port, Some(8080)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["myclinic", "--config", "custom.toml", "serve"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["myclinic", "--log-level", "debug", "migrate"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::Migrate(_)));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["myclinic", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["myclinic", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
