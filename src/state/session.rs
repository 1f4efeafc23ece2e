//! Persisted authentication session.
//!
//! The session is the outcome of the last successful sign-in: token, role,
//! and username. It survives page reloads via `localStorage` and is exposed
//! to the rest of the app as an `RwSignal<SessionState>` context. The store
//! is all-or-nothing: a read only yields a session when every field is
//! present, so consumers never observe a half-written session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::SignInResponse;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";
#[cfg(feature = "hydrate")]
const ROLE_KEY: &str = "roleType";
#[cfg(feature = "hydrate")]
const USERNAME_KEY: &str = "username";

/// The persisted outcome of a successful sign-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role_type: String,
    pub username: String,
}

impl Session {
    /// Build a session from a successful sign-in response.
    ///
    /// Unknown roles are recorded as-is; role interpretation happens at
    /// navigation time, not here.
    #[must_use]
    pub fn from_response(resp: &SignInResponse) -> Self {
        Self {
            token: resp.token.clone(),
            role_type: resp.user.role.role_type.clone(),
            username: resp.user.username.clone(),
        }
    }
}

/// Authentication state tracking the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
}

impl SessionState {
    /// Initial state for app startup: whatever the last sign-in persisted,
    /// or absent on the server / on a fresh browser.
    #[must_use]
    pub fn restore() -> Self {
        Self { session: load() }
    }
}

/// Read the persisted session from `localStorage`.
///
/// Returns `None` on the server, or when any of the three keys is missing.
#[must_use]
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let token = storage.get_item(TOKEN_KEY).ok()??;
        let role_type = storage.get_item(ROLE_KEY).ok()??;
        let username = storage.get_item(USERNAME_KEY).ok()??;
        Some(Session { token, role_type, username })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Write all three session fields to `localStorage`.
pub fn persist(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_KEY, &session.token);
                let _ = storage.set_item(ROLE_KEY, &session.role_type);
                let _ = storage.set_item(USERNAME_KEY, &session.username);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
