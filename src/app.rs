//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::Toasts;
use crate::pages::{
    admin_products::AdminProductsPage, admin_users::UserManagementPage,
    partner_dashboard::PartnerDashboardPage, signin::SignInPage, user_landing::UserLandingPage,
};
use crate::state::session::SessionState;
use crate::state::signin::SignInState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, sign-in workflow, and toast contexts, then sets
/// up client-side routing for the sign-in page and the role destinations.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session state is seeded from localStorage so a reload keeps the user
    // signed in.
    let session = RwSignal::new(SessionState::restore());
    let signin = RwSignal::new(SignInState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(signin);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/rbac-client.css"/>
        <Title text="Admin Panel"/>

        <Router>
            <Toasts/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SignInPage/>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("user-landing-page") view=UserLandingPage/>
                <Route
                    path=(StaticSegment("super"), StaticSegment("admin"), StaticSegment("products"))
                    view=AdminProductsPage
                />
                <Route
                    path=(StaticSegment("partner"), StaticSegment("dashboard"))
                    view=PartnerDashboardPage
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("usermanagement"))
                    view=UserManagementPage
                />
            </Routes>
        </Router>
    }
}
