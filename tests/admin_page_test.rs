#![cfg(target_arch = "wasm32")]

use elysium_admin::auth::provide_auth;
use elysium_admin::components::admin_page::AdminPage;
use elysium_admin::components::toast::{provide_toasts, ToastContainer};
use elysium_admin::config::{AdminConfig, CURRENT_USER_KEY, REVIEWS_KEY};
use elysium_admin::storage::{KeyValueStore, MemoryStorage, StorageHandle};
use gloo_timers::future::sleep;
use leptos::*;
use leptos_router::Router;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const ADMIN: &str = r#"{"fullName":"Admin User","username":"admin","email":"admin@elysium.com","isAdmin":true}"#;

fn seeded_storage() -> MemoryStorage {
    seeded_storage_without_session().with_entry(CURRENT_USER_KEY, ADMIN)
}

fn seeded_storage_without_session() -> MemoryStorage {
    MemoryStorage::new()
        .with_entry(
            "elysium_bookings",
            r#"[{"id":"BK-1","userName":"Ana","roomName":"Ocean Suite","checkIn":"2026-03-01","checkOut":"2026-03-04","total":420,"status":"confirmed"},{"id":"BK-2","userName":"Ben","total":null,"status":"pending"}]"#,
        )
        .with_entry(
            "elysium_users",
            r#"[{"id":"u1","fullName":"Ana Diaz","username":"ana","email":"ana@example.com"}]"#,
        )
        .with_entry(
            REVIEWS_KEY,
            r#"[{"id":"r1","name":"Ana","rating":5,"text":"Perfect","createdAt":"2026-02-01T09:00:00Z"},{"id":"r2","name":"Ben","rating":3,"text":"Noisy","createdAt":""}]"#,
        )
}

// Mounts the admin page in a fresh container and returns it with the shared storage handle.
fn mount_admin(store: MemoryStorage) -> (web_sys::HtmlElement, StorageHandle) {
    let document = document();
    let container = document
        .create_element("div")
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>();
    document.body().unwrap().append_child(&container).unwrap();

    let handle = StorageHandle::new(store);
    let mounted = handle.clone();
    mount_to(container.clone(), move || {
        let config = AdminConfig {
            toast_duration_ms: 0,
            ..AdminConfig::default()
        };
        provide_context(mounted.clone());
        provide_auth(mounted, CURRENT_USER_KEY.to_string());
        provide_toasts(config.toast_duration_ms);
        provide_context(config);
        view! {
            <Router>
                <AdminPage />
            </Router>
            <ToastContainer />
        }
    });
    (container, handle)
}

fn texts(container: &web_sys::HtmlElement, selector: &str) -> Vec<String> {
    let nodes = container.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.text_content())
        .collect()
}

fn click(container: &web_sys::HtmlElement, selector: &str) {
    container
        .query_selector(selector)
        .unwrap()
        .expect("element to click")
        .unchecked_into::<web_sys::HtmlElement>()
        .click();
}

#[wasm_bindgen_test]
async fn test_dashboard_shows_stats() {
    let (container, _) = mount_admin(seeded_storage());
    sleep(Duration::from_millis(50)).await;

    assert_eq!(texts(&container, ".welcome"), vec!["Welcome, Admin User"]);
    assert_eq!(
        texts(&container, ".stat-value"),
        vec!["2", "1", "$420", "3,249"]
    );
    container.remove();
}

#[wasm_bindgen_test]
async fn test_empty_storage_shows_baseline() {
    let (container, _) = mount_admin(MemoryStorage::new().with_entry(CURRENT_USER_KEY, ADMIN));
    sleep(Duration::from_millis(50)).await;

    assert_eq!(texts(&container, ".stat-value"), vec!["0", "0", "$0", "3,247"]);

    click(&container, "button[data-tab='reviews']");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(texts(&container, ".average-rating"), vec!["4.9"]);
    assert_eq!(texts(&container, ".empty"), vec!["No user reviews yet"]);
    container.remove();
}

#[wasm_bindgen_test]
async fn test_switching_tabs_leaves_storage_untouched() {
    let (container, handle) = mount_admin(seeded_storage());
    let keys = ["elysium_bookings", "elysium_users", REVIEWS_KEY];
    let before: Vec<_> = keys.iter().map(|key| handle.store().get(key).unwrap()).collect();

    click(&container, "button[data-tab='users']");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(texts(&container, ".user-row td:first-child"), vec!["Ana Diaz"]);
    assert!(texts(&container, ".stat-value").is_empty());

    click(&container, "button[data-tab='bookings']");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(texts(&container, ".booking-row .font-mono"), vec!["BK-1", "BK-2"]);

    click(&container, "button[data-tab='dashboard']");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(texts(&container, ".stat-value").len(), 4);

    let after: Vec<_> = keys.iter().map(|key| handle.store().get(key).unwrap()).collect();
    assert_eq!(before, after);
    container.remove();
}

#[wasm_bindgen_test]
async fn test_delete_review_updates_list_and_storage() {
    let (container, handle) = mount_admin(seeded_storage());

    click(&container, "button[data-tab='reviews']");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(texts(&container, ".review-name"), vec!["Ana", "Ben"]);
    assert_eq!(texts(&container, ".review-date")[1], "N/A");

    click(&container, "[data-review-id='r1'] .delete-review");
    sleep(Duration::from_millis(50)).await;

    assert_eq!(texts(&container, ".review-name"), vec!["Ben"]);
    assert_eq!(texts(&container, ".user-submitted"), vec!["1"]);
    let stored = handle.store().get(REVIEWS_KEY).unwrap().unwrap();
    assert!(stored.contains("\"r2\""));
    assert!(!stored.contains("\"r1\""));
    assert!(texts(&container, ".toast-message").contains(&"Review deleted".to_string()));
    container.remove();
}

#[wasm_bindgen_test]
async fn test_unreadable_reviews_show_banner_and_baseline() {
    let store = MemoryStorage::new()
        .with_entry(CURRENT_USER_KEY, ADMIN)
        .with_entry(REVIEWS_KEY, "{not json");
    let (container, _) = mount_admin(store);
    sleep(Duration::from_millis(50)).await;

    let banners = texts(&container, ".load-error");
    assert_eq!(banners.len(), 1);
    assert!(banners[0].contains(REVIEWS_KEY));
    assert_eq!(texts(&container, ".welcome"), vec!["Welcome, Admin User"]);
    assert_eq!(texts(&container, ".stat-value"), vec!["0", "0", "$0", "3,247"]);
    container.remove();
}

#[wasm_bindgen_test]
async fn test_no_session_does_not_render_dashboard() {
    let (container, _) = mount_admin(seeded_storage_without_session());
    sleep(Duration::from_millis(50)).await;

    assert!(container.query_selector(".admin").unwrap().is_none());
    assert!(texts(&container, ".welcome").is_empty());
    assert!(texts(&container, ".stat-value").is_empty());
    container.remove();
}

#[wasm_bindgen_test]
async fn test_non_admin_session_does_not_render_dashboard() {
    let store = seeded_storage_without_session().with_entry(
        CURRENT_USER_KEY,
        r#"{"fullName":"Guest","username":"guest","email":"guest@example.com","isAdmin":false}"#,
    );
    let (container, _) = mount_admin(store);
    sleep(Duration::from_millis(50)).await;

    assert!(container.query_selector(".admin").unwrap().is_none());
    assert!(texts(&container, ".welcome").is_empty());
    container.remove();
}

#[wasm_bindgen_test]
async fn test_logout_clears_session_and_leaves_dashboard() {
    let (container, handle) = mount_admin(seeded_storage());
    sleep(Duration::from_millis(50)).await;
    assert!(container.query_selector(".admin").unwrap().is_some());

    click(&container, ".logout");
    sleep(Duration::from_millis(50)).await;

    assert_eq!(handle.store().get(CURRENT_USER_KEY).unwrap(), None);
    assert!(container.query_selector(".admin").unwrap().is_none());
    assert!(handle.store().get(REVIEWS_KEY).unwrap().is_some());
    container.remove();
}
