//! SQLite schema definition.

/// Complete schema for the embedded store.
///
/// Mirrors `migrations/001_initial_schema.sql` with SQLite types; dates are
/// ISO text.
pub const SCHEMA: &str = r#"
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS patients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    phone TEXT NOT NULL,
    gender TEXT NOT NULL DEFAULT 'ชาย',
    dob TEXT,
    created_at TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS appointments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_name TEXT,
    appointment_date TEXT,
    appointment_time TEXT,
    reason TEXT,
    status TEXT DEFAULT 'Pending',
    patient_id INTEGER REFERENCES patients(id) ON DELETE SET NULL
);

CREATE INDEX IF NOT EXISTS idx_appointments_date_time
    ON appointments(appointment_date, appointment_time);
CREATE INDEX IF NOT EXISTS idx_appointments_patient_id
    ON appointments(patient_id);

CREATE TABLE IF NOT EXISTS settings (
    setting_key TEXT PRIMARY KEY,
    setting_value TEXT
);
"#;
