use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of a stored record. Other flows write either strings or numbers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(serde_json::Number),
}

impl RecordId {
    /// Reads the `id` field of a raw record. Missing or `null` ids are empty text.
    pub fn of_record(record: &Value) -> Self {
        match record.get("id") {
            Some(Value::String(text)) => RecordId::Text(text.clone()),
            Some(Value::Number(number)) => RecordId::Number(number.clone()),
            Some(Value::Null) | None => RecordId::default(),
            Some(other) => RecordId::Text(other.to_string()),
        }
    }
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Text(String::new())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Text(text) => f.write_str(text),
            RecordId::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}
