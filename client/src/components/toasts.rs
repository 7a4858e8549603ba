//! Toast stack rendered once at the app root.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

/// Milliseconds a toast stays visible before dismissing itself.
pub const TOAST_TTL_MS: u32 = 4_000;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| view! { <ToastItem toast=toast/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
        toasts.update(|t| t.dismiss(id));
    });

    let class = format!("toast {}", toast.kind.css_modifier());
    view! {
        <div class=class role="status">
            <span class="toast__message">{toast.message}</span>
            <button
                class="toast__close"
                type="button"
                aria-label="Dismiss"
                on:click=move |_| toasts.update(|t| t.dismiss(id))
            >
                "×"
            </button>
        </div>
    }
}
