use crate::models::record_id::RecordId;
use crate::models::{number_field, text_field};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(from = "Value")]
pub struct Booking {
    pub id: RecordId,
    pub user_name: String,
    pub room_name: String,
    // Date strings as the booking flow wrote them, never validated here
    pub check_in: String,
    pub check_out: String,
    pub total: Option<f64>,
    pub status: String,
}

impl From<Value> for Booking {
    fn from(record: Value) -> Self {
        Self {
            id: RecordId::of_record(&record),
            user_name: text_field(&record, "userName"),
            room_name: text_field(&record, "roomName"),
            check_in: text_field(&record, "checkIn"),
            check_out: text_field(&record, "checkOut"),
            total: number_field(&record, "total"),
            status: text_field(&record, "status"),
        }
    }
}

impl Booking {
    /// Amount counted towards revenue. Missing or non-numeric totals count as zero.
    pub fn amount(&self) -> f64 {
        self.total.unwrap_or(0.0)
    }
}
