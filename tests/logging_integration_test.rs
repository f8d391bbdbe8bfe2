//! Integration tests for logging functionality
//!
//! The global subscriber can only be installed once per test binary, so
//! everything that initializes logging lives in one test.

use myclinic::config::LoggingConfig;
use myclinic::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_file_logging_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "hourly".to_string(),
    };

    assert!(!log_path.exists());
    let guard = init_logging("debug", &config).unwrap();
    tracing::info!(patient_id = 7, "Patient created");
    drop(guard);

    assert!(log_path.exists());

    // A second global subscriber is refused
    assert!(init_logging("info", &LoggingConfig::default()).is_err());
}
