//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::MyClinicConfig;
use super::secret_string;
use crate::domain::errors::ClinicError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into MyClinicConfig
/// 4. Applies environment variable overrides (MYCLINIC_* prefix, then legacy names)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use myclinic::config::loader::load_config;
///
/// let config = load_config("myclinic.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<MyClinicConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ClinicError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ClinicError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: MyClinicConfig = toml::from_str(&contents)
        .map_err(|e| ClinicError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finish(&mut config)?;
    Ok(config)
}

/// Loads configuration from a TOML file, falling back to defaults when the file is absent
///
/// Environment overrides and validation apply in both cases.
///
/// # Errors
///
/// Returns an error if an existing file is invalid, or if the resulting
/// configuration fails validation.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<MyClinicConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::info!(
        path = %path.display(),
        "Configuration file not found, using defaults"
    );
    let mut config = MyClinicConfig::default();
    finish(&mut config)?;
    Ok(config)
}

fn finish(config: &mut MyClinicConfig) -> Result<()> {
    apply_legacy_env_overrides(config)?;
    apply_env_overrides(config)?;

    config.validate().map_err(|e| {
        ClinicError::Configuration(format!("Configuration validation failed: {e}"))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ClinicError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ClinicError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Parses a numeric or boolean override, naming the variable on failure
fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        ClinicError::Configuration(format!("Invalid value '{value}' for {name}"))
    })
}

/// Applies the plain variable names used by older deployments
///
/// `DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_NAME` and `PORT`. These run
/// before the `MYCLINIC_*` overrides so the prefixed names win.
fn apply_legacy_env_overrides(config: &mut MyClinicConfig) -> Result<()> {
    if let Ok(val) = std::env::var("DB_HOST") {
        config.postgresql.host = val;
    }
    if let Ok(val) = std::env::var("DB_USER") {
        config.postgresql.user = val;
    }
    if let Ok(val) = std::env::var("DB_PASSWORD") {
        config.postgresql.password = secret_string(val);
    }
    if let Ok(val) = std::env::var("DB_NAME") {
        config.postgresql.database = val;
    }
    if let Ok(val) = std::env::var("PORT") {
        config.server.port = parse_env("PORT", &val)?;
    }
    Ok(())
}

/// Applies environment variable overrides using MYCLINIC_* prefix
///
/// Environment variables follow the pattern: MYCLINIC_<SECTION>_<KEY>
/// For example: MYCLINIC_SERVER_PORT, MYCLINIC_POSTGRESQL_HOST
fn apply_env_overrides(config: &mut MyClinicConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("MYCLINIC_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Server overrides
    if let Ok(val) = std::env::var("MYCLINIC_SERVER_HOST") {
        config.server.host = val;
    }
    if let Ok(val) = std::env::var("MYCLINIC_SERVER_PORT") {
        config.server.port = parse_env("MYCLINIC_SERVER_PORT", &val)?;
    }
    if let Ok(val) = std::env::var("MYCLINIC_SERVER_CORS_ALLOWED_ORIGINS") {
        config.server.cors_allowed_origins = val
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }
    if let Ok(val) = std::env::var("MYCLINIC_SERVER_REQUEST_TIMEOUT_SECONDS") {
        config.server.request_timeout_seconds =
            parse_env("MYCLINIC_SERVER_REQUEST_TIMEOUT_SECONDS", &val)?;
    }

    // Store selection
    if let Ok(val) = std::env::var("MYCLINIC_DATABASE_TARGET") {
        config.database_target = val.parse().map_err(ClinicError::Configuration)?;
    }

    // PostgreSQL overrides
    if let Ok(val) = std::env::var("MYCLINIC_POSTGRESQL_HOST") {
        config.postgresql.host = val;
    }
    if let Ok(val) = std::env::var("MYCLINIC_POSTGRESQL_PORT") {
        config.postgresql.port = parse_env("MYCLINIC_POSTGRESQL_PORT", &val)?;
    }
    if let Ok(val) = std::env::var("MYCLINIC_POSTGRESQL_USER") {
        config.postgresql.user = val;
    }
    if let Ok(val) = std::env::var("MYCLINIC_POSTGRESQL_PASSWORD") {
        config.postgresql.password = secret_string(val);
    }
    if let Ok(val) = std::env::var("MYCLINIC_POSTGRESQL_DATABASE") {
        config.postgresql.database = val;
    }
    if let Ok(val) = std::env::var("MYCLINIC_POSTGRESQL_MAX_CONNECTIONS") {
        config.postgresql.max_connections =
            parse_env("MYCLINIC_POSTGRESQL_MAX_CONNECTIONS", &val)?;
    }

    // SQLite overrides
    if let Ok(val) = std::env::var("MYCLINIC_SQLITE_PATH") {
        config.sqlite.path = val;
    }

    // Auth overrides
    if let Ok(val) = std::env::var("MYCLINIC_AUTH_REQUIRE_SESSION") {
        config.auth.require_session = parse_env("MYCLINIC_AUTH_REQUIRE_SESSION", &val)?;
    }
    if let Ok(val) = std::env::var("MYCLINIC_AUTH_USERNAME") {
        config.auth.username = val;
    }
    if let Ok(val) = std::env::var("MYCLINIC_AUTH_PASSWORD") {
        config.auth.password = secret_string(val);
    }
    if let Ok(val) = std::env::var("MYCLINIC_AUTH_SESSION_TTL_MINUTES") {
        config.auth.session_ttl_minutes = parse_env("MYCLINIC_AUTH_SESSION_TTL_MINUTES", &val)?;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("MYCLINIC_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_env("MYCLINIC_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("MYCLINIC_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("MYCLINIC_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
