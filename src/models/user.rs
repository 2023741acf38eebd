use crate::models::record_id::RecordId;
use crate::models::text_field;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(from = "Value")]
pub struct User {
    pub id: RecordId,
    pub full_name: String,
    pub username: String,
    pub email: String,
}

impl From<Value> for User {
    fn from(record: Value) -> Self {
        Self {
            id: RecordId::of_record(&record),
            full_name: text_field(&record, "fullName"),
            username: text_field(&record, "username"),
            email: text_field(&record, "email"),
        }
    }
}
