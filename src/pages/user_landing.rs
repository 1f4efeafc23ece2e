//! Landing page customers arrive at after signing in.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Customer landing page; redirects to `/signin` without a session.
#[component]
pub fn UserLandingPage() -> impl IntoView {
    super::require_session();
    let session = expect_context::<RwSignal<SessionState>>();

    let username = move || {
        session
            .get()
            .session
            .map(|s| s.username)
            .unwrap_or_default()
    };

    view! {
        <div class="landing-page">
            <h1>"Welcome"</h1>
            <p class="landing-page__user">{username}</p>
        </div>
    }
}
