// src/models/review.rs
use crate::models::record_id::RecordId;
use crate::models::{number_field, text_field};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MAX_STARS: usize = 5;

/// A user-submitted review. The stored record is kept as written, so rewriting
/// the collection after a delete leaves surviving records byte-for-byte intact.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "Value", into = "Value")]
pub struct Review {
    id: RecordId,
    name: String,       // Name the guest signed the review with
    rating: f64,
    text: String,
    created_at: String, // Timestamp string from the submission flow
    record: Value,
}

impl From<Value> for Review {
    fn from(record: Value) -> Self {
        Self {
            id: RecordId::of_record(&record),
            name: text_field(&record, "name"),
            rating: number_field(&record, "rating").unwrap_or(0.0),
            text: text_field(&record, "text"),
            created_at: text_field(&record, "createdAt"),
            record,
        }
    }
}

impl From<Review> for Value {
    fn from(review: Review) -> Self {
        review.record
    }
}

impl Review {
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rating as stored. Non-numeric ratings count as zero.
    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Number of filled stars to draw for this review.
    pub fn stars(&self) -> usize {
        self.rating.clamp(0.0, MAX_STARS as f64).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_submission_fields() {
        let review = Review::from(json!({
            "id": "r1",
            "name": "Lin",
            "rating": 4,
            "text": "Lovely",
            "createdAt": "2026-01-02T10:00:00Z"
        }));
        assert_eq!(review.id(), &RecordId::from("r1"));
        assert_eq!(review.name(), "Lin");
        assert_eq!(review.rating(), 4.0);
        assert_eq!(review.text(), "Lovely");
        assert_eq!(review.created_at(), "2026-01-02T10:00:00Z");
    }

    #[test]
    fn stored_record_is_written_back_unchanged() {
        let json = r#"{"id":"r1","rating":4,"text":null,"roomId":"suite-2"}"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.text(), "");
        assert_eq!(review.name(), "");

        let encoded: Value = serde_json::to_value(&review).unwrap();
        assert_eq!(encoded, serde_json::from_str::<Value>(json).unwrap());
    }

    #[test]
    fn fractional_and_odd_ratings_are_accepted() {
        assert_eq!(Review::from(json!({"rating": 4.5})).rating(), 4.5);
        assert_eq!(Review::from(json!({"rating": "5"})).rating(), 0.0);
    }

    #[test]
    fn stars_are_capped() {
        assert_eq!(Review::from(json!({"rating": 9})).stars(), 5);
        assert_eq!(Review::from(json!({"rating": -2})).stars(), 0);
        assert_eq!(Review::from(json!({"rating": 3})).stars(), 3);
        assert_eq!(Review::from(json!({"rating": 4.5})).stars(), 4);
    }
}
