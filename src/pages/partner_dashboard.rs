//! Dashboard for partner accounts.

use leptos::prelude::*;

/// Partner dashboard; redirects to `/signin` without a session.
#[component]
pub fn PartnerDashboardPage() -> impl IntoView {
    super::require_session();

    view! {
        <div class="partner-page">
            <h1>"Partner Dashboard"</h1>
        </div>
    }
}
