//! JSON shapes exchanged with the authentication endpoint, plus the request
//! error taxonomy. Kept free of browser dependencies so the mapping logic
//! is testable natively.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Message shown when a failure response carries no usable message of its
/// own.
pub const FALLBACK_ERROR: &str = "Login failed. Please check your credentials.";

/// JSON body for the sign-in POST.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful sign-in response.
///
/// The server nests the role one level down; the shape here mirrors the
/// wire format exactly and is flattened into a `Session` afterwards.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct SignInResponse {
    pub token: String,
    pub user: ResponseUser,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct ResponseUser {
    pub role: ResponseRole,
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct ResponseRole {
    pub role_type: String,
}

/// Body of an HTTP error response; the `message` field is optional.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Why a sign-in request failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    /// The server answered with an HTTP error status.
    #[error("sign-in rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    /// The request never produced a usable response: network failure,
    /// or a success body that could not be decoded.
    #[error("sign-in request failed: {0}")]
    Transport(String),
}

impl SignInError {
    /// Text shown to the user: the server's own message when one was
    /// provided, otherwise the fixed fallback.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(m), ..
            } => m.clone(),
            _ => FALLBACK_ERROR.to_owned(),
        }
    }
}
