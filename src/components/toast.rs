use crate::utils::leptos_owner::with_owner_safe;
use leptos::*;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
        }
    }
}

/// Transient notifications. Each toast is dismissed after `duration_ms`, or by hand.
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    duration_ms: u32,
    owner: Option<Owner>,
}

impl ToastContext {
    pub fn list(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Success));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Error));
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts
            .try_update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    fn push(&self, toast: Toast) {
        let id = toast.id;
        self.toasts.update(|toasts| toasts.push(toast));
        if self.duration_ms > 0 {
            let context = *self;
            after_delay(self.duration_ms, move || {
                with_owner_safe(context.owner, "toast auto-dismiss", move || context.dismiss(id));
            });
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn after_delay(ms: u32, f: impl FnOnce() + 'static) {
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(ms).await;
        f();
    });
}

// No timers outside the browser; toasts stay until dismissed.
#[cfg(not(target_arch = "wasm32"))]
fn after_delay(_ms: u32, _f: impl FnOnce() + 'static) {}

pub fn provide_toasts(duration_ms: u32) -> ToastContext {
    let context = ToastContext {
        toasts: create_rw_signal(Vec::new()),
        duration_ms,
        owner: Owner::current(),
    };
    provide_context(context);
    context
}

pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed top-4 right-4 z-50 space-y-3 max-w-sm w-full">
            <For
                each=move || toasts.list()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = use_toasts();
    let id = toast.id;

    let (class, icon) = match toast.kind {
        ToastKind::Success => ("toast toast-success bg-green-50 border-green-200 text-green-700", "✓"),
        ToastKind::Error => ("toast toast-error bg-red-50 border-red-200 text-red-700", "✕"),
    };

    view! {
        <div class=class role="status">
            <span class="toast-icon">{icon}</span>
            <p class="toast-message">{toast.message}</p>
            <button class="toast-close" title="Dismiss" on:click=move |_| toasts.dismiss(id)>
                "×"
            </button>
        </div>
    }
}
