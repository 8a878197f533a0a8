//! HTTP login call against the portal API.
//!
//! Browser (wasm32): real request via `gloo-net`, raced against the
//! configured timeout. Other targets: compiles but always fails with a
//! transport error, since there is no browser runtime to issue the call.
//!
//! ERROR HANDLING
//! ==============
//! Callers only ever see [`LoginError`]. Transport details (network failure,
//! bad status, timeout, malformed body) are logged and collapsed into one
//! fixed user-facing message; server rejections surface the server's own
//! message text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

use crate::config::ApiConfig;

/// Fixed user-facing text for any transport-level failure.
pub const TRANSPORT_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Outcome of a failed login attempt, as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The server processed the request and rejected it with a message.
    #[error("{0}")]
    Rejected(String),
    /// Network error, non-2xx status, timeout, or malformed response.
    #[error("An error occurred. Please try again.")]
    Transport,
}

/// Wire shape of the login endpoint's JSON response.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(any(test, target_arch = "wasm32"))]
fn login_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

/// Map a decoded response onto the login outcome.
///
/// A success flag without a token, or a failure flag without a message, is a
/// contract violation and counts as a transport failure.
#[cfg(any(test, target_arch = "wasm32"))]
fn interpret_response(body: LoginResponse) -> Result<String, LoginError> {
    if body.success {
        body.token.ok_or(LoginError::Transport)
    } else {
        match body.message {
            Some(message) => Err(LoginError::Rejected(message)),
            None => Err(LoginError::Transport),
        }
    }
}

/// Perform one login attempt against `POST {base}/api/login`.
///
/// Sends the credentials as a JSON body with an `application/json`
/// content-type. Exactly one request per call: no retry, no reuse of a
/// pending attempt.
///
/// # Errors
///
/// [`LoginError::Rejected`] when the server answers `success: false`;
/// [`LoginError::Transport`] for anything else.
pub async fn login(config: &ApiConfig, email: &str, password: &str) -> Result<String, LoginError> {
    #[cfg(target_arch = "wasm32")]
    {
        use futures::future::{Either, select};

        let request = send_login_request(config.login_endpoint(), login_payload(email, password));
        let timeout = gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
            config.timeout_ms,
        )));
        match select(Box::pin(request), Box::pin(timeout)).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(((), _)) => {
                log::error!("login request timed out after {}ms", config.timeout_ms);
                Err(LoginError::Transport)
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (config, email, password);
        Err(LoginError::Transport)
    }
}

#[cfg(target_arch = "wasm32")]
async fn send_login_request(
    endpoint: String,
    payload: serde_json::Value,
) -> Result<String, LoginError> {
    let resp = gloo_net::http::Request::post(&endpoint)
        .json(&payload)
        .map_err(|e| transport_error("failed to encode login request", &e))?
        .send()
        .await
        .map_err(|e| transport_error("login request failed", &e))?;
    if !resp.ok() {
        log::error!("login request returned status {}", resp.status());
        return Err(LoginError::Transport);
    }
    let body: LoginResponse = resp
        .json()
        .await
        .map_err(|e| transport_error("failed to decode login response", &e))?;
    interpret_response(body)
}

#[cfg(target_arch = "wasm32")]
fn transport_error(context: &str, err: &gloo_net::Error) -> LoginError {
    log::error!("{context}: {err}");
    LoginError::Transport
}
