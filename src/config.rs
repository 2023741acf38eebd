//! Application constants for the admin dashboard.
//! Provided through Leptos context so tests can swap storage keys or the rating baseline.

pub const BOOKINGS_KEY: &str = "elysium_bookings";
pub const USERS_KEY: &str = "elysium_users";
pub const REVIEWS_KEY: &str = "elysium_reviews";
pub const CURRENT_USER_KEY: &str = "elysium_current_user";

/// Local storage keys the dashboard reads from and writes to.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageKeys {
    pub bookings: String,
    pub users: String,
    pub reviews: String,
    pub current_user: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            bookings: BOOKINGS_KEY.to_string(),
            users: USERS_KEY.to_string(),
            reviews: REVIEWS_KEY.to_string(),
            current_user: CURRENT_USER_KEY.to_string(),
        }
    }
}

/// Published rating that user-submitted reviews are blended into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingBaseline {
    pub rating: f64,
    pub count: u64,
}

impl Default for RatingBaseline {
    fn default() -> Self {
        Self {
            rating: 4.9,
            count: 3247,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminConfig {
    pub keys: StorageKeys,
    pub baseline: RatingBaseline,
    pub toast_duration_ms: u32,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            baseline: RatingBaseline::default(),
            toast_duration_ms: 4000,
        }
    }
}
