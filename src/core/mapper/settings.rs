//! Settings mapping

use crate::domain::{ClinicError, Result, SettingRow, SettingsMap};
use serde_json::Value;

/// Folds stored rows into one flat mapping
///
/// Duplicate keys resolve to the value seen last in iteration order.
pub fn fold_settings<I>(rows: I) -> SettingsMap
where
    I: IntoIterator<Item = SettingRow>,
{
    rows.into_iter().map(|row| (row.key, row.value)).collect()
}

/// Converts one JSON value from a `PUT /settings` body to its stored text
///
/// Strings are stored as-is; numbers and booleans by their JSON text.
///
/// # Errors
///
/// Returns `ClinicError::Validation` for `null`, arrays and objects.
pub fn setting_value_from_json(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(ClinicError::Validation(format!(
            "Setting '{key}' must be a string, number or boolean"
        ))),
    }
}

/// Converts a whole `PUT /settings` body into rows to upsert, in key order
///
/// # Errors
///
/// Returns `ClinicError::Validation` when the body is empty or a value is not a scalar.
pub fn settings_from_json(body: &serde_json::Map<String, Value>) -> Result<Vec<SettingRow>> {
    if body.is_empty() {
        return Err(ClinicError::Validation(
            "No settings to update provided".to_string(),
        ));
    }

    body.iter()
        .map(|(key, value)| {
            if key.trim().is_empty() {
                return Err(ClinicError::Validation(
                    "Setting keys must not be empty".to_string(),
                ));
            }
            Ok(SettingRow::new(key.clone(), setting_value_from_json(key, value)?))
        })
        .collect()
}
