use crate::config::RatingBaseline;
use crate::format::{format_currency, format_grouped};
use crate::models::booking::Booking;
use crate::models::review::Review;
use crate::models::user::User;

/// Scalar values shown on the dashboard, folded from the loaded collections.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_bookings: usize,
    pub registered_users: usize,
    pub revenue: f64,
    pub total_reviews: u64,
    pub user_reviews: usize,
    pub average_rating: f64,
}

impl DashboardStats {
    pub fn compute(
        bookings: &[Booking],
        users: &[User],
        reviews: &[Review],
        baseline: &RatingBaseline,
    ) -> Self {
        Self {
            total_bookings: bookings.len(),
            registered_users: users.len(),
            revenue: revenue(bookings),
            total_reviews: total_reviews(reviews, baseline),
            user_reviews: reviews.len(),
            average_rating: average_rating(reviews, baseline),
        }
    }

    /// The four dashboard cards as `(label, value)` pairs, in display order.
    pub fn cards(&self) -> [(&'static str, String); 4] {
        [
            ("Total Bookings", self.total_bookings.to_string()),
            ("Registered Users", self.registered_users.to_string()),
            ("Revenue", format_currency(self.revenue)),
            ("Total Reviews", self.total_reviews_display()),
        ]
    }

    pub fn total_reviews_display(&self) -> String {
        format_grouped(self.total_reviews as f64)
    }

    pub fn average_rating_display(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}

pub fn revenue(bookings: &[Booking]) -> f64 {
    bookings.iter().map(Booking::amount).sum()
}

pub fn total_reviews(reviews: &[Review], baseline: &RatingBaseline) -> u64 {
    baseline.count + reviews.len() as u64
}

/// Blends user ratings into the published baseline, rounded to one decimal.
/// Without user reviews the baseline rating is returned untouched.
pub fn average_rating(reviews: &[Review], baseline: &RatingBaseline) -> f64 {
    if reviews.is_empty() {
        return baseline.rating;
    }
    let submitted: f64 = reviews.iter().map(Review::rating).sum();
    let weighted = baseline.rating * baseline.count as f64 + submitted;
    let blended = weighted / total_reviews(reviews, baseline) as f64;
    (blended * 10.0).round() / 10.0
}
