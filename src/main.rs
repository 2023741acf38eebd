#[cfg(feature = "csr")]
pub fn main() {
    // to run: `trunk serve --open` or `cargo leptos watch`
    use elysium_admin::app::*;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // no client-side main function without the `csr` feature
    // see `wasm-test` for browser tests
}
