//! Sign-in page — the credential form driving the authentication workflow.
//!
//! Validation runs before anything leaves the browser: a failed gate keeps
//! the workflow idle and no request is made. Passing validation moves the
//! workflow into its submitting phase (which also disables the button) and
//! issues the one request. Completion writes the session, notifies, and
//! navigates by role; failure surfaces a message and re-enables the form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::signin::{self, Credentials, SignInState};

/// Sign-in form with per-field errors and a single in-flight submit.
#[component]
pub fn SignInPage() -> impl IntoView {
    let workflow = expect_context::<RwSignal<SignInState>>();
    let session = expect_context::<RwSignal<crate::state::session::SessionState>>();
    let toasts = expect_context::<RwSignal<crate::state::toast::ToastState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let show_password = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submitting = move || workflow.get().is_submitting();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let credentials = Credentials {
            email: email.get(),
            password: password.get(),
        };

        // Pre-submit gates: surface per-field errors and stop here.
        let errors = signin::validate(&credentials);
        email_error.set(errors.email);
        password_error.set(errors.password);
        if !errors.is_clear() {
            return;
        }

        // At most one request in flight; a second submit is a no-op.
        if !workflow.try_update(SignInState::begin).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                submit(credentials, workflow, session, toasts, navigate).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, session, toasts);
        }
    };

    view! {
        <div class="signin-page">
            <form class="signin-form" on:submit=on_submit>
                <h1>"Sign In"</h1>

                <label class="signin-form__label">
                    "Email *"
                    <input
                        class="signin-form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            // Spaces are never valid in an email address.
                            if ev.key() == " " {
                                ev.prevent_default();
                            }
                        }
                    />
                </label>
                <Show when=move || email_error.get().is_some()>
                    <p class="signin-form__error">{move || email_error.get()}</p>
                </Show>

                <label class="signin-form__label">
                    "Password *"
                    <input
                        class="signin-form__input"
                        type=move || if show_password.get() { "text" } else { "password" }
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        class="signin-form__toggle"
                        type="button"
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                </label>
                <Show when=move || password_error.get().is_some()>
                    <p class="signin-form__error">{move || password_error.get()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" prop:disabled=submitting>
                    {move || if submitting() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>

            <p class="signin-page__links">
                "Don't have an account? " <a href="/signup">"Sign Up"</a>
            </p>
            <p class="signin-page__links">
                <a href="/forget-password">"Forgot Password?"</a>
            </p>
        </div>
    }
}

/// Drive one submit from request to outcome.
///
/// Success writes the session (signal + localStorage), emits one success
/// toast, and navigates by the role routing table. Failure leaves the
/// session untouched, emits one error toast, and records the message on
/// the workflow for display.
#[cfg(feature = "hydrate")]
async fn submit(
    credentials: Credentials,
    workflow: RwSignal<SignInState>,
    session_sig: RwSignal<crate::state::session::SessionState>,
    toasts: RwSignal<crate::state::toast::ToastState>,
    navigate: impl Fn(&str, NavigateOptions),
) {
    use crate::state::session::{self, Session};

    match crate::net::api::sign_in(&credentials).await {
        Ok(resp) => {
            let new_session = Session::from_response(&resp);
            session::persist(&new_session);
            let role_type = new_session.role_type.clone();
            session_sig.update(|s| s.session = Some(new_session));
            workflow.update(SignInState::succeed);
            toasts.update(|t| {
                t.success("Login successful!");
            });
            if let Some(target) = signin::navigation_target(&role_type) {
                navigate(target.path, NavigateOptions::default());
                if target.force_reload {
                    reload_page();
                }
            }
        }
        Err(err) => {
            log::error!("sign-in request failed: {err}");
            let message = err.user_message();
            toasts.update(|t| {
                t.error(message.clone());
            });
            workflow.update(|s| s.fail(message));
        }
    }
}

/// Full page reload after the customer redirect, so the whole app restarts
/// against the freshly stored session.
#[cfg(feature = "hydrate")]
fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}
