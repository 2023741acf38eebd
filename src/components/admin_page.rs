use crate::auth::use_auth;
use crate::components::bookings_table::BookingsTable;
use crate::components::reviews_list::ReviewsPanel;
use crate::components::sidebar::{AdminSidebar, MobileTabBar};
use crate::components::stat_cards::StatCards;
use crate::components::toast::use_toasts;
use crate::components::users_table::UsersTable;
use crate::config::AdminConfig;
use crate::data::{delete_review, AdminData, LoadedData};
use crate::models::record_id::RecordId;
use crate::models::tab::AdminTab;
use crate::stats::DashboardStats;
use crate::storage::StorageHandle;
use leptos::logging::error;
use leptos::*;
use leptos_router::{NavigateOptions, Redirect};

/// Admin route. Visitors without the admin flag are sent back to the landing page.
#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_admin()
            fallback=|| {
                view! {
                    <Redirect
                        path="/"
                        options=NavigateOptions {
                            replace: true,
                            ..Default::default()
                        }
                    />
                }
            }
        >
            <AdminDashboard />
        </Show>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let storage = expect_context::<StorageHandle>();
    let config = expect_context::<AdminConfig>();

    // Read once on mount; an unreadable key leaves its table empty.
    let LoadedData { data, errors } = AdminData::load(storage.store(), &config.keys);
    let AdminData {
        bookings,
        users,
        reviews,
    } = data;

    let bookings = store_value(bookings);
    let users = store_value(users);
    let (reviews, set_reviews) = create_signal(reviews);
    let active_tab = create_rw_signal(AdminTab::default());

    let baseline = config.baseline;
    let stats = create_memo(move |_| {
        bookings.with_value(|bookings| {
            users.with_value(|users| {
                reviews.with(|reviews| DashboardStats::compute(bookings, users, reviews, &baseline))
            })
        })
    });

    let keys = config.keys.clone();
    let on_delete = Callback::new(move |id: RecordId| {
        let current = reviews.get_untracked();
        match delete_review(storage.store(), &keys, &current, &id) {
            Ok(remaining) => {
                set_reviews.set(remaining);
                toasts.success("Review deleted");
            }
            Err(err) => {
                error!("[ADMIN] Failed to delete review {}: {}", id, err);
                toasts.error("Could not delete review");
            }
        }
    });

    view! {
        <div class="admin min-h-screen bg-secondary flex">
            <AdminSidebar active_tab=active_tab on_logout=auth.logout />
            <MobileTabBar active_tab=active_tab />
            <main class="flex-1 p-4 md:p-8 pb-24 lg:pb-8">
                <div class="mb-8">
                    <h2 class="welcome font-display text-2xl md:text-3xl mb-2">
                        {move || format!("Welcome, {}", auth.display_name())}
                    </h2>
                    <p class="text-muted-foreground">"Manage your hotel operations"</p>
                </div>
                {errors
                    .into_iter()
                    .map(|err| {
                        view! {
                            <div class="load-error" role="alert">
                                {format!("Stored data could not be read: {}", err)}
                            </div>
                        }
                    })
                    .collect_view()}
                {move || match active_tab.get() {
                    AdminTab::Dashboard => view! { <StatCards stats=stats /> }.into_view(),
                    AdminTab::Bookings => {
                        view! { <BookingsTable bookings=bookings.get_value() /> }.into_view()
                    }
                    AdminTab::Users => view! { <UsersTable users=users.get_value() /> }.into_view(),
                    AdminTab::Reviews => {
                        view! { <ReviewsPanel reviews=reviews stats=stats on_delete=on_delete /> }
                            .into_view()
                    }
                }}
            </main>
        </div>
    }
}
