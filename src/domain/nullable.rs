//! Deserialization helper for fields where "absent" and "null" differ
//!
//! Used with `#[serde(default, deserialize_with = "nullable")]` on an
//! `Option<Option<T>>` field:
//!
//! - field missing → `None`
//! - field `null` → `Some(None)`
//! - field present → `Some(Some(value))`

use serde::{Deserialize, Deserializer};

/// Deserializes a present-but-possibly-null field into `Some(Option<T>)`
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "nullable")]
        value: Option<Option<String>>,
    }

    #[test]
    fn test_absent_null_and_present_are_distinct() {
        let absent: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.value, None);

        let null: Probe = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(null.value, Some(None));

        let present: Probe = serde_json::from_str(r#"{"value": "x"}"#).unwrap();
        assert_eq!(present.value, Some(Some("x".to_string())));
    }
}
