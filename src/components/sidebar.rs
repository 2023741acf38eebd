use crate::models::tab::AdminTab;
use leptos::*;

/// Desktop navigation: brand, one button per tab, and logout.
#[component]
pub fn AdminSidebar(active_tab: RwSignal<AdminTab>, on_logout: Callback<()>) -> impl IntoView {
    view! {
        <aside class="sidebar w-64 bg-sidebar text-sidebar-foreground p-6 hidden lg:block">
            <div class="mb-8">
                <h1 class="font-display text-xl text-sidebar-primary">"ELYSIUM"</h1>
                <p class="text-sm text-sidebar-foreground/60">"Admin Panel"</p>
            </div>
            <nav class="space-y-2">
                {AdminTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                data-tab=tab.id()
                                class="w-full flex items-center gap-3 px-4 py-3 rounded-lg transition-colors"
                                class:active=move || active_tab.get() == tab
                                on:click=move |_| active_tab.set(tab)
                            >
                                <span class="tab-icon">{tab.icon()}</span>
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <button
                class="logout mt-8 w-full flex items-center gap-3 px-4 py-3 text-destructive rounded-lg"
                on:click=move |_| on_logout.call(())
            >
                "Logout"
            </button>
        </aside>
    }
}

// Bottom bar for small screens, bound to the same tab signal.
#[component]
pub fn MobileTabBar(active_tab: RwSignal<AdminTab>) -> impl IntoView {
    view! {
        <div class="mobile-tabs lg:hidden fixed bottom-0 left-0 right-0 bg-card border-t border-border z-50">
            <div class="flex">
                {AdminTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                data-tab=tab.id()
                                class="flex-1 flex flex-col items-center gap-1 py-3 text-xs"
                                class:active=move || active_tab.get() == tab
                                on:click=move |_| active_tab.set(tab)
                            >
                                <span class="tab-icon">{tab.icon()}</span>
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
