//! Patient mapping
//!
//! Read side: a stored [`PatientRecord`] becomes a [`PatientSummary`] with the
//! name split into first/last, a derived `hn`, and `lastVisit` taken from the
//! creation timestamp (there is no visit log yet).
//!
//! Write side: a [`PatientPayload`] becomes a [`NewPatient`] or a
//! [`PatientPatch`], joining first/last names and defaulting gender. A patch
//! keeps first/last name apart so one half can change on its own.

use super::{format_iso_date, non_blank, parse_iso_date};
use crate::domain::{
    ClinicError, Gender, NewPatient, PatientPatch, PatientPayload, PatientRecord, PatientSummary,
    Result,
};
use chrono::{DateTime, Utc};

/// Splits a stored full name into `(first, last)`
///
/// The first whitespace-separated token is the first name; the remaining
/// tokens joined by single spaces form the last name, empty when absent.
pub fn split_name(name: &str) -> (String, String) {
    let mut tokens = name.split_whitespace();
    let first = tokens.next().unwrap_or_default().to_string();
    let last = tokens.collect::<Vec<_>>().join(" ");
    (first, last)
}

/// Joins first and last name with a single space
pub fn join_name(first: &str, last: &str) -> String {
    format!("{} {}", first.trim(), last.trim()).trim().to_string()
}

/// ISO date portion of the creation timestamp, or an empty string
pub fn last_visit(created_at: Option<DateTime<Utc>>) -> String {
    created_at
        .map(|ts| format_iso_date(ts.date_naive()))
        .unwrap_or_default()
}

/// Maps a stored patient row to its list representation
pub fn to_summary(record: &PatientRecord) -> PatientSummary {
    let (first_name, last_name) = split_name(&record.name);

    PatientSummary {
        id: record.id.to_string(),
        hn: record.id.hospital_number(),
        first_name,
        last_name,
        phone: record.phone.clone(),
        last_visit: last_visit(record.created_at),
        gender: record.gender,
        dob: record.dob.map(format_iso_date).unwrap_or_default(),
    }
}

/// Resolves the full name from either `name` or `firstName`/`lastName`
///
/// An explicit `name` wins. Returns `None` when the payload carries neither shape.
pub fn resolve_name(payload: &PatientPayload) -> Option<String> {
    if let Some(name) = &payload.name {
        return Some(name.trim().to_string());
    }

    match (&payload.first_name, &payload.last_name) {
        (None, None) => None,
        (first, last) => Some(join_name(
            first.as_deref().unwrap_or_default(),
            last.as_deref().unwrap_or_default(),
        )),
    }
}

/// Maps a create payload to the row to insert
///
/// # Errors
///
/// Returns `ClinicError::Validation` when the name or phone is missing or
/// blank, or when `dob` is not an ISO date.
pub fn to_new_patient(payload: &PatientPayload) -> Result<NewPatient> {
    let name = resolve_name(payload).filter(|n| !n.is_empty());
    let phone = non_blank(payload.phone.as_deref());

    let (Some(name), Some(phone)) = (name, phone) else {
        return Err(ClinicError::Validation(
            "Name and Phone are required".to_string(),
        ));
    };

    let dob = match payload.dob.as_ref().and_then(|d| non_blank(d.as_deref())) {
        Some(value) => Some(parse_iso_date("dob", value)?),
        None => None,
    };

    Ok(NewPatient {
        name,
        phone: phone.to_string(),
        gender: Gender::parse_or_default(payload.gender.as_deref()),
        dob,
    })
}

/// Maps an update payload to a partial patch
///
/// Only keys present in the payload end up in the patch. A `null` or empty
/// `dob` clears the stored date.
///
/// # Errors
///
/// Returns `ClinicError::Validation` when `dob` is present but not an ISO date.
pub fn to_patch(payload: &PatientPayload) -> Result<PatientPatch> {
    let dob = match &payload.dob {
        None => None,
        Some(value) => match non_blank(value.as_deref()) {
            Some(date) => Some(Some(parse_iso_date("dob", date)?)),
            None => Some(None),
        },
    };

    let trimmed = |value: &Option<String>| value.as_ref().map(|v| v.trim().to_string());

    Ok(PatientPatch {
        name: trimmed(&payload.name),
        first_name: trimmed(&payload.first_name),
        last_name: trimmed(&payload.last_name),
        phone: payload.phone.as_ref().map(|p| p.trim().to_string()),
        gender: payload
            .gender
            .as_deref()
            .map(|g| Gender::parse_or_default(Some(g))),
        dob,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PatientId;
    use chrono::{NaiveDate, TimeZone};
    use test_case::test_case;

    fn payload(json: &str) -> PatientPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test_case("สมชาย ใจดี", "สมชาย", "ใจดี" ; "thai first and last")]
    #[test_case("Somchai", "Somchai", "" ; "single token")]
    #[test_case("Anna Maria von Trapp", "Anna", "Maria von Trapp" ; "multi token last name")]
    #[test_case("  Jane   Doe  ", "Jane", "Doe" ; "extra whitespace")]
    #[test_case("", "", "" ; "empty name")]
    fn test_split_name(name: &str, first: &str, last: &str) {
        assert_eq!(split_name(name), (first.to_string(), last.to_string()));
    }

    #[test]
    fn test_join_then_split_round_trip() {
        let stored = join_name("สมชาย", "ใจดี");
        assert_eq!(stored, "สมชาย ใจดี");
        assert_eq!(
            split_name(&stored),
            ("สมชาย".to_string(), "ใจดี".to_string())
        );
    }

    #[test]
    fn test_join_name_without_last() {
        assert_eq!(join_name("Somchai", ""), "Somchai");
    }

    #[test]
    fn test_last_visit() {
        let ts = Utc.with_ymd_and_hms(2023, 10, 26, 14, 30, 0).unwrap();
        assert_eq!(last_visit(Some(ts)), "2023-10-26");
        assert_eq!(last_visit(None), "");
    }

    #[test]
    fn test_to_summary() {
        let record = PatientRecord {
            id: PatientId::new(7),
            name: "สมชาย ใจดี".to_string(),
            phone: "0812345678".to_string(),
            gender: Gender::Female,
            dob: NaiveDate::from_ymd_opt(1990, 5, 17),
            created_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()),
        };

        let summary = to_summary(&record);
        assert_eq!(summary.id, "7");
        assert_eq!(summary.hn, "HN00007");
        assert_eq!(summary.first_name, "สมชาย");
        assert_eq!(summary.last_name, "ใจดี");
        assert_eq!(summary.last_visit, "2024-03-01");
        assert_eq!(summary.dob, "1990-05-17");
    }

    #[test]
    fn test_summary_json_shape() {
        let record = PatientRecord {
            id: PatientId::new(123456),
            name: "Somchai".to_string(),
            phone: "1".to_string(),
            gender: Gender::Male,
            dob: None,
            created_at: None,
        };

        let json = serde_json::to_value(to_summary(&record)).unwrap();
        assert_eq!(json["id"], "123456");
        assert_eq!(json["hn"], "HN123456");
        assert_eq!(json["firstName"], "Somchai");
        assert_eq!(json["lastName"], "");
        assert_eq!(json["lastVisit"], "");
        assert_eq!(json["gender"], "ชาย");
    }

    #[test]
    fn test_new_patient_from_split_names() {
        let new = to_new_patient(&payload(
            r#"{"firstName": "สมชาย", "lastName": "ใจดี", "phone": "081"}"#,
        ))
        .unwrap();
        assert_eq!(new.name, "สมชาย ใจดี");
        assert_eq!(new.phone, "081");
        assert_eq!(new.gender, Gender::Male);
        assert_eq!(new.dob, None);
    }

    #[test_case(r#"{"name": "A B", "phone": "1"}"# ; "gender omitted")]
    #[test_case(r#"{"name": "A B", "phone": "1", "gender": "robot"}"# ; "gender unknown")]
    #[test_case(r#"{"name": "A B", "phone": "1", "gender": ""}"# ; "gender empty")]
    fn test_new_patient_gender_defaults(json: &str) {
        assert_eq!(to_new_patient(&payload(json)).unwrap().gender, Gender::Male);
    }

    #[test_case(r#"{"phone": "1"}"# ; "name missing")]
    #[test_case(r#"{"name": "  ", "phone": "1"}"# ; "name blank")]
    #[test_case(r#"{"name": "A"}"# ; "phone missing")]
    #[test_case(r#"{"firstName": "", "lastName": "", "phone": "1"}"# ; "split names blank")]
    fn test_new_patient_requires_name_and_phone(json: &str) {
        let err = to_new_patient(&payload(json)).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Name and Phone are required");
    }

    #[test]
    fn test_new_patient_rejects_bad_dob() {
        let result = to_new_patient(&payload(r#"{"name": "A", "phone": "1", "dob": "17/05/1990"}"#));
        assert!(matches!(result, Err(ClinicError::Validation(_))));
    }

    #[test]
    fn test_patch_only_carries_present_keys() {
        let patch = to_patch(&payload(r#"{"phone": "000"}"#)).unwrap();
        assert_eq!(patch.phone.as_deref(), Some("000"));
        assert!(patch.name.is_none());
        assert!(patch.first_name.is_none());
        assert!(patch.last_name.is_none());
        assert!(patch.gender.is_none());
        assert!(patch.dob.is_none());
    }

    #[test]
    fn test_patch_keeps_name_halves_apart() {
        let patch = to_patch(&payload(r#"{"lastName": " รักดี "}"#)).unwrap();
        assert!(patch.name.is_none());
        assert!(patch.first_name.is_none());
        assert_eq!(patch.last_name.as_deref(), Some("รักดี"));
    }

    #[test]
    fn test_patch_empty_payload() {
        assert!(to_patch(&payload("{}")).unwrap().is_empty());
    }

    #[test]
    fn test_patch_null_dob_clears() {
        let patch = to_patch(&payload(r#"{"dob": null}"#)).unwrap();
        assert_eq!(patch.dob, Some(None));
    }

    #[test]
    fn test_patch_gender_normalized() {
        let patch = to_patch(&payload(r#"{"gender": "female"}"#)).unwrap();
        assert_eq!(patch.gender, Some(Gender::Female));

        let patch = to_patch(&payload(r#"{"gender": "???"}"#)).unwrap();
        assert_eq!(patch.gender, Some(Gender::Male));
    }
}
