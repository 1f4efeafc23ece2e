//! REST helper for the authentication endpoint.
//!
//! Client-side (hydrate): a real HTTP call via `gloo-net`. Server-side
//! (SSR): a stub returning a transport error, since signing in is only
//! meaningful in the browser.
//!
//! No retries and no timeout: a failed submit requires the user to submit
//! again, and a hung request simply leaves the form in its submitting
//! state.

#![allow(clippy::unused_async)]

use super::types::{SignInError, SignInResponse};
use crate::state::signin::Credentials;

/// Fixed authentication endpoint of the user-product API.
pub const SIGN_IN_URL: &str = "https://user-product-api.vercel.app/api/auth/login";

/// Exchange credentials for a token, issuing exactly one request per call.
///
/// # Errors
///
/// `Rejected` for HTTP error responses, carrying the server's `message`
/// when the body has one; `Transport` for network or decode failures.
pub async fn sign_in(credentials: &Credentials) -> Result<SignInResponse, SignInError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::{ErrorBody, SignInRequest};

        let body = SignInRequest {
            email: &credentials.email,
            password: &credentials.password,
        };
        let resp = gloo_net::http::Request::post(SIGN_IN_URL)
            .json(&body)
            .map_err(|e| SignInError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SignInError::Transport(e.to_string()))?;

        if !resp.ok() {
            let message = resp.json::<ErrorBody>().await.ok().and_then(|b| b.message);
            return Err(SignInError::Rejected {
                status: resp.status(),
                message,
            });
        }

        resp.json::<SignInResponse>()
            .await
            .map_err(|e| SignInError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(SignInError::Transport("not available on server".to_owned()))
    }
}
