//! Record mapping between stored rows and API shapes
//!
//! Pure functions, no store access:
//!
//! - [`patient`] - name split/join, Hospital Number derivation, gender defaulting
//! - [`appointment`] - ISO date formatting, status and patient reference parsing
//! - [`settings`] - folding `(key, value)` rows into one flat mapping

pub mod appointment;
pub mod patient;
pub mod settings;

use crate::domain::{ClinicError, Result};
use chrono::NaiveDate;

/// Format used for every date crossing the API boundary
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO `YYYY-MM-DD` date supplied by a client
///
/// # Errors
///
/// Returns `ClinicError::Validation` naming `field` when the value is not a valid date.
pub fn parse_iso_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).map_err(|_| {
        ClinicError::Validation(format!(
            "Invalid {field} '{value}'. Expected format YYYY-MM-DD"
        ))
    })
}

/// Renders a date as ISO `YYYY-MM-DD`
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Returns the trimmed value when it is present and not blank
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("dob", "2024-01-02").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        assert!(parse_iso_date("dob", "02/01/2024").is_err());
        assert!(parse_iso_date("dob", "2024-13-01").is_err());
    }

    #[test]
    fn test_parse_error_names_field() {
        let err = parse_iso_date("appointment_date", "soon").unwrap_err();
        assert!(err.to_string().contains("appointment_date"));
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  x ")), Some("x"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }
}
