use crate::format::format_date;
use crate::models::record_id::RecordId;
use crate::models::review::{Review, MAX_STARS};
use crate::stats::DashboardStats;
use leptos::*;

fn stars(count: usize) -> String {
    "★".repeat(count)
}

/// Reviews tab: the blended rating overview above the list of user reviews.
#[component]
pub fn ReviewsPanel(
    reviews: ReadSignal<Vec<Review>>,
    stats: Memo<DashboardStats>,
    on_delete: Callback<RecordId>,
) -> impl IntoView {
    view! {
        <div class="reviews space-y-6">
            <ReviewsOverview stats=stats />
            <div class="bg-card rounded-xl shadow-sm overflow-hidden">
                <div class="p-4 md:p-6 border-b border-border">
                    <h3 class="font-display text-xl">"All User Reviews"</h3>
                </div>
                <ReviewsList reviews=reviews on_delete=on_delete />
            </div>
        </div>
    }
}

#[component]
fn ReviewsOverview(stats: Memo<DashboardStats>) -> impl IntoView {
    view! {
        <div class="reviews-overview bg-card rounded-xl shadow-sm p-4 md:p-6">
            <div class="flex flex-col md:flex-row md:items-center justify-between gap-4">
                <div>
                    <h3 class="font-display text-xl mb-2">"Guest Reviews Overview"</h3>
                    <div class="flex items-center gap-3">
                        <span class="average-rating font-display text-3xl text-accent">
                            {move || stats.get().average_rating_display()}
                        </span>
                        <div class="flex gap-1 text-accent">{stars(MAX_STARS)}</div>
                        <span class="review-count text-muted-foreground">
                            {move || format!("({} reviews)", stats.get().total_reviews_display())}
                        </span>
                    </div>
                </div>
                <div class="text-right">
                    <p class="text-sm text-muted-foreground">"User Submitted"</p>
                    <p class="user-submitted font-display text-2xl">{move || stats.get().user_reviews}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ReviewsList(reviews: ReadSignal<Vec<Review>>, on_delete: Callback<RecordId>) -> impl IntoView {
    view! {
        <div class="divide-y divide-border">
            <Show
                when=move || reviews.with(|reviews| !reviews.is_empty())
                fallback=|| view! { <div class="empty p-8 text-center text-muted-foreground">"No user reviews yet"</div> }
            >
                {move || {
                    reviews
                        .get()
                        .into_iter()
                        .map(|review| view! { <ReviewRow review=review on_delete=on_delete /> })
                        .collect_view()
                }}
            </Show>
        </div>
    }
}

#[component]
fn ReviewRow(review: Review, on_delete: Callback<RecordId>) -> impl IntoView {
    let id = review.id().clone();

    view! {
        <div class="review-row p-4 md:p-6" data-review-id=review.id().to_string()>
            <div class="flex justify-between items-start gap-4">
                <div class="flex-1">
                    <div class="flex items-center gap-3 mb-2">
                        <span class="review-name font-medium">{review.name().to_string()}</span>
                        <div class="flex gap-0.5 text-accent">{stars(review.stars())}</div>
                    </div>
                    <p class="review-text text-muted-foreground mb-2">{format!("\"{}\"", review.text())}</p>
                    <p class="review-date text-xs text-muted-foreground">{format_date(review.created_at())}</p>
                </div>
                <button
                    class="delete-review p-2 text-destructive rounded-lg transition-colors"
                    title="Delete review"
                    on:click=move |_| on_delete.call(id.clone())
                >
                    "🗑"
                </button>
            </div>
        </div>
    }
}
