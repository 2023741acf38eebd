use crate::stats::DashboardStats;
use leptos::*;

#[component]
pub fn StatCards(#[prop(into)] stats: Signal<DashboardStats>) -> impl IntoView {
    view! {
        <div class="stat-cards grid sm:grid-cols-2 lg:grid-cols-4 gap-4 md:gap-6 mb-8">
            {move || {
                stats
                    .get()
                    .cards()
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stat-card bg-card rounded-xl p-4 md:p-6 shadow-sm">
                                <p class="stat-value text-xl md:text-2xl font-display">{value}</p>
                                <p class="stat-label text-xs md:text-sm text-muted-foreground">{label}</p>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
