//! # rbac-client
//!
//! Leptos + WASM front-end for the role-based access control admin panel.
//!
//! The crate centers on the sign-in page: collect credentials, authenticate
//! against the user-product API, persist the resulting session, and redirect
//! the user to the page their role is entitled to. Pages, shared state, and
//! network helpers live in their own modules; everything browser-specific is
//! gated behind the `hydrate` feature so the same code renders on the server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point — attach the client to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
