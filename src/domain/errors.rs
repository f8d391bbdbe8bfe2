//! Domain error types
//!
//! This module defines the error hierarchy for MyClinic.
//! Store adapters translate their driver errors into these variants so that
//! no third-party error type leaks past the adapter layer.

use thiserror::Error;

/// Main MyClinic error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum ClinicError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Store query or statement failures
    #[error("Database error: {0}")]
    Database(String),

    /// Failure to obtain a pooled connection or reach the store
    #[error("Connection error: {0}")]
    Connection(String),

    /// Client input that cannot be turned into a record
    #[error("Validation error: {0}")]
    Validation(String),

    /// A write named a row that does not exist (foreign key violation)
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl ClinicError {
    /// Returns `true` when the error was caused by the store rather than the caller
    pub fn is_store_failure(&self) -> bool {
        matches!(self, ClinicError::Database(_) | ClinicError::Connection(_))
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ClinicError {
    fn from(err: std::io::Error) -> Self {
        ClinicError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ClinicError {
    fn from(err: toml::de::Error) -> Self {
        ClinicError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clinic_error_display() {
        let err = ClinicError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_store_failure_classification() {
        assert!(ClinicError::Database("boom".to_string()).is_store_failure());
        assert!(ClinicError::Connection("refused".to_string()).is_store_failure());
        assert!(!ClinicError::Validation("bad".to_string()).is_store_failure());
        assert!(!ClinicError::InvalidReference("patient 9".to_string()).is_store_failure());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: ClinicError = io_err.into();
        assert!(matches!(err, ClinicError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ClinicError = toml_err.into();
        assert!(matches!(err, ClinicError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_clinic_error_implements_std_error() {
        let err = ClinicError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
