//! Page components, one per route.

pub mod admin_products;
pub mod admin_users;
pub mod partner_dashboard;
pub mod signin;
pub mod user_landing;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Bounce to `/signin` when no session is present. Every post-login page
/// installs this guard on mount.
fn require_session() {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    Effect::new(move || {
        if session.get().session.is_none() {
            navigate("/signin", NavigateOptions::default());
        }
    });
}
