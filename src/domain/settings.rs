//! Clinic settings model
//!
//! Settings are independent `(setting_key, setting_value)` rows folded into
//! one flat mapping for clients.

use std::collections::BTreeMap;

/// One row of the `settings` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingRow {
    pub key: String,
    pub value: String,
}

impl SettingRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Flat key → value view of the settings table
pub type SettingsMap = BTreeMap<String, String>;
