//! Application shell for the Elysium admin panel.
//! Wires storage, session and notifications into context and routes between the landing page and the dashboard.
use crate::auth::{provide_auth, use_auth};
use crate::components::admin_page::AdminPage;
use crate::components::toast::{provide_toasts, ToastContainer};
use crate::config::AdminConfig;
use crate::storage::StorageHandle;
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes, A};

#[component]
pub fn App() -> impl IntoView {
    view! { <AppShell config=AdminConfig::default() storage=StorageHandle::browser_or_memory() /> }
}

/// Provides the shared contexts. Split from [`App`] so a different store or config can be mounted.
#[component]
pub fn AppShell(config: AdminConfig, storage: StorageHandle) -> impl IntoView {
    provide_meta_context();
    provide_context(storage.clone());
    provide_auth(storage, config.keys.current_user.clone());
    provide_toasts(config.toast_duration_ms);
    provide_context(config);

    view! {
        <Title text="Elysium Admin" />
        <Router>
            <Routes>
                <Route path="/" view=Home />
                <Route path="/admin" view=AdminPage />
            </Routes>
        </Router>
        <ToastContainer />
    }
}

#[component]
fn Home() -> impl IntoView {
    let auth = use_auth();

    view! {
        <main class="home">
            <h1 class="font-display">"ELYSIUM"</h1>
            <Show
                when=move || auth.is_admin()
                fallback=|| view! { <p>"Sign in with an administrator account to manage the hotel."</p> }
            >
                <A href="/admin">"Open admin panel"</A>
            </Show>
        </main>
    }
}
