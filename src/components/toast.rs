//! Toast overlay rendering the shared notification queue.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// How long a toast stays up before dismissing itself.
#[cfg(feature = "hydrate")]
const DISMISS_MS: u32 = 4000;

/// Overlay showing every queued toast; each entry auto-dismisses after a
/// few seconds or on click of its close button.
#[component]
pub fn Toasts() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toasts">
            <For
                each=move || toasts.get().toasts
                key=|t| t.id.clone()
                children=move |toast| {
                    #[cfg(feature = "hydrate")]
                    {
                        let id = toast.id.clone();
                        leptos::task::spawn_local(async move {
                            gloo_timers::future::TimeoutFuture::new(DISMISS_MS).await;
                            toasts.update(|t| t.dismiss(&id));
                        });
                    }

                    let id = toast.id.clone();
                    let kind_class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=kind_class>
                            <span class="toast__text">{toast.text.clone()}</span>
                            <button
                                class="toast__close"
                                on:click=move |_| toasts.update(|t| t.dismiss(&id))
                            >
                                "x"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
