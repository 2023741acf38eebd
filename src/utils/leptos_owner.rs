/// Utility to run a closure under an owner captured earlier, e.g. from a timer callback
/// that fires after the component that scheduled it was unmounted.
/// If the owner is disposed, logs and returns None.
pub fn with_owner_safe<F, R>(owner: Option<leptos::Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    match owner {
        Some(owner) => match leptos::try_with_owner(owner, f) {
            Ok(value) => Some(value),
            Err(_) => {
                leptos::logging::log!("[OWNER] Owner disposed before callback ran: {}", log_context);
                None
            }
        },
        None => {
            leptos::logging::log!("[OWNER] No Leptos owner in context: {}", log_context);
            None
        }
    }
}
