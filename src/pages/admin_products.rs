//! Product management page for super admins.

use leptos::prelude::*;

/// Super-admin product management page; redirects to `/signin` without a
/// session.
#[component]
pub fn AdminProductsPage() -> impl IntoView {
    super::require_session();

    view! {
        <div class="admin-page">
            <h1>"Product Management"</h1>
        </div>
    }
}
