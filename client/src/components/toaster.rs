//! Corner stack of transient notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<ToastState>`; anything can `notify` into it.
//! In the browser each toast schedules its own dismissal.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_LIFETIME_MS;
use crate::state::toast::{ToastKind, ToastState};

/// Show a toast and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let Some(id) = toasts.try_update(|t| t.push(kind, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(TOAST_LIFETIME_MS, move || {
            let _ = toasts.try_update(|t| t.dismiss(id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Renders every active toast. Clicking one dismisses it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = format!("toast {}", toast.kind.css_modifier());
                        view! {
                            <div
                                class=class
                                on:click=move |_| {
                                    let _ = toasts.try_update(|t| t.dismiss(id));
                                }
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
