use crate::config::StorageKeys;
use crate::models::booking::Booking;
use crate::models::record_id::RecordId;
use crate::models::review::Review;
use crate::models::user::User;
use crate::storage::{read_collection, write_collection, KeyValueStore, StorageError};
use leptos::logging::{error, log};
use serde::de::DeserializeOwned;

/// Everything the admin page reads from local storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminData {
    pub bookings: Vec<Booking>,
    pub users: Vec<User>,
    pub reviews: Vec<Review>,
}

/// Result of a load: whatever could be read, plus one error per unreadable key.
#[derive(Debug, Default)]
pub struct LoadedData {
    pub data: AdminData,
    pub errors: Vec<StorageError>,
}

impl AdminData {
    /// Reads the three collections. Each key is independent: a missing key is empty,
    /// and an unreadable key is reported and left empty without touching the others.
    pub fn load(store: &dyn KeyValueStore, keys: &StorageKeys) -> LoadedData {
        let mut errors = Vec::new();
        let data = Self {
            bookings: read_or_report(store, &keys.bookings, &mut errors),
            users: read_or_report(store, &keys.users, &mut errors),
            reviews: read_or_report(store, &keys.reviews, &mut errors),
        };
        log!(
            "[ADMIN] Loaded {} bookings, {} users, {} reviews",
            data.bookings.len(),
            data.users.len(),
            data.reviews.len()
        );
        LoadedData { data, errors }
    }
}

fn read_or_report<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
    errors: &mut Vec<StorageError>,
) -> Vec<T> {
    read_collection(store, key).unwrap_or_else(|err| {
        error!("[ADMIN] Failed to load `{}`: {}", key, err);
        errors.push(err);
        Vec::new()
    })
}

/// Reviews with every record matching `id` removed, others in their original order.
pub fn without_review(reviews: &[Review], id: &RecordId) -> Vec<Review> {
    reviews
        .iter()
        .filter(|review| review.id() != id)
        .cloned()
        .collect()
}

/// Removes a review and writes the remaining list back under the reviews key.
/// The stored array is replaced wholesale; a concurrent writer's changes are lost.
pub fn delete_review(
    store: &dyn KeyValueStore,
    keys: &StorageKeys,
    reviews: &[Review],
    id: &RecordId,
) -> Result<Vec<Review>, StorageError> {
    let remaining = without_review(reviews, id);
    write_collection(store, &keys.reviews, &remaining)?;
    log!(
        "[ADMIN] Deleted review {} ({} remaining)",
        id,
        remaining.len()
    );
    Ok(remaining)
}
