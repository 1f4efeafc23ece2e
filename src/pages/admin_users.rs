//! User management page for admins.

use leptos::prelude::*;

/// Admin user-management page; redirects to `/signin` without a session.
#[component]
pub fn UserManagementPage() -> impl IntoView {
    super::require_session();

    view! {
        <div class="admin-page">
            <h1>"User Management"</h1>
        </div>
    }
}
