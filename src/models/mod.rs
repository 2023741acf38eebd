pub mod booking;
pub mod record_id;
pub mod review;
pub mod tab;
pub mod user;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Stored records are written by other parts of the site and may carry `null`
/// where a string is expected. Decode those as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Records are read field by field from the raw JSON so that a wrongly typed
// field never rejects the record, or the collection it sits in.

/// Text of a field. Missing or `null` is empty; other scalars are shown as written.
pub(crate) fn text_field(record: &Value, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// A numeric field, or `None` when it is missing or not a JSON number.
pub(crate) fn number_field(record: &Value, key: &str) -> Option<f64> {
    record.get(key).and_then(Value::as_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_field_tolerates_other_types() {
        let record = json!({"a": "x", "b": null, "c": 12, "d": true});
        assert_eq!(text_field(&record, "a"), "x");
        assert_eq!(text_field(&record, "b"), "");
        assert_eq!(text_field(&record, "c"), "12");
        assert_eq!(text_field(&record, "d"), "true");
        assert_eq!(text_field(&record, "missing"), "");
        assert_eq!(text_field(&json!("not an object"), "a"), "");
    }

    #[test]
    fn number_field_ignores_non_numbers() {
        let record = json!({"a": 4.5, "b": "420", "c": null});
        assert_eq!(number_field(&record, "a"), Some(4.5));
        assert_eq!(number_field(&record, "b"), None);
        assert_eq!(number_field(&record, "c"), None);
    }
}
